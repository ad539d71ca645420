//! Kubische Bézier-Auswertung und Polylinien-Sampling.

use super::{SplineError, Vector2};
use glam::Vec2;
use std::str::FromStr;

/// Standard-Anzahl Segmente pro Bézier-Kurve.
pub const DEFAULT_BEZIER_SEGMENTS: usize = 200;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Gewünschte Ausgabeform pro Sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleForm {
    /// `Vector2` pro Sample
    #[default]
    Point,
    /// Rohes Koordinatenpaar `[x, y]` pro Sample
    Pair,
}

impl FromStr for SampleForm {
    type Err = SplineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "point" => Ok(SampleForm::Point),
            "pair" => Ok(SampleForm::Pair),
            other => Err(SplineError::UnsupportedOutputForm(other.to_string())),
        }
    }
}

/// Ergebnis eines Sampling-Laufs in der angeforderten Form
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    Points(Vec<Vector2>),
    Pairs(Vec<[f32; 2]>),
}

impl Samples {
    pub fn len(&self) -> usize {
        match self {
            Samples::Points(points) => points.len(),
            Samples::Pairs(pairs) => pairs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Tastet kubische Bézier-Kurven in `segments + 1` Punkte ab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BezierSampler {
    segments: usize,
}

impl BezierSampler {
    /// `segments == 0` ist unzulässig.
    pub fn new(segments: usize) -> Result<Self, SplineError> {
        if segments == 0 {
            return Err(SplineError::InvalidSegmentCount);
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Samplet die durch genau 4 Kontrollpunkte definierte Kurve.
    ///
    /// Punkt `i` liegt bei `t = i / segments`; `i = 0` ist exakt P0,
    /// `i = segments` exakt P3.
    pub fn sample(&self, control: &[Vector2], form: SampleForm) -> Result<Samples, SplineError> {
        let &[p0, p1, p2, p3] = control else {
            return Err(SplineError::InvalidControlPointCount(control.len()));
        };
        let (p0, p1, p2, p3) = (p0.as_vec2(), p1.as_vec2(), p2.as_vec2(), p3.as_vec2());

        let eval = |i: usize| {
            if i == 0 {
                return p0;
            }
            if i == self.segments {
                return p3;
            }
            cubic_bezier(p0, p1, p2, p3, i as f32 / self.segments as f32)
        };

        let samples = match form {
            SampleForm::Point => Samples::Points(
                (0..=self.segments).map(|i| Vector2::from(eval(i))).collect(),
            ),
            SampleForm::Pair => {
                Samples::Pairs((0..=self.segments).map(|i| eval(i).to_array()).collect())
            }
        };
        Ok(samples)
    }

    /// Kurzform von `sample` mit `SampleForm::Point`.
    pub fn sample_points(&self, control: &[Vector2]) -> Result<Vec<Vector2>, SplineError> {
        match self.sample(control, SampleForm::Point)? {
            Samples::Points(points) => Ok(points),
            Samples::Pairs(pairs) => Ok(pairs.into_iter().map(Vector2::from).collect()),
        }
    }
}

impl Default for BezierSampler {
    fn default() -> Self {
        Self {
            segments: DEFAULT_BEZIER_SEGMENTS,
        }
    }
}

/// 4-Punkt-Fenster an den Offsets 0, 3, 6, … einer Flattening-Folge.
pub fn segment_windows(points: &[Vector2]) -> impl Iterator<Item = &[Vector2]> {
    (0..points.len().saturating_sub(3))
        .step_by(3)
        .map(move |i| &points[i..i + 4])
}
