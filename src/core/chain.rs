//! Die SplineChain: doppelt verkettete, geordnete Folge von Ankern.
//!
//! Die Kette ist alleiniger Besitzer aller Anker (ID-indizierter Speicher).
//! `previous`/`next` der Anker sind IDs in diesen Speicher, damit entsteht
//! kein Besitz-Zyklus und Navigation bleibt O(1).

use super::bezier::{segment_windows, BezierSampler};
use super::{Anchor, AnchorId, HandleId, PointRef, SplineError, Vector2};
use glam::Vec2;
use std::collections::HashMap;

/// Treffer eines Hit-Tests auf der Kette
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointHit {
    pub target: PointRef,
    pub distance: f32,
}

/// Editierbare Kurve aus Ankern.
///
/// Invarianten: `len() == 0` genau dann wenn `start` und `end` leer sind;
/// sonst hat `start` keinen Vorgänger und `end` keinen Nachfolger, und die
/// Vorwärts-Traversierung besucht genau `len()` Anker.
#[derive(Debug, Clone, Default)]
pub struct SplineChain {
    anchors: HashMap<AnchorId, Anchor>,
    start: Option<AnchorId>,
    end: Option<AnchorId>,
    length: usize,
    next_id: u64,
}

impl SplineChain {
    /// Erstellt eine leere Kette.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn start(&self) -> Option<AnchorId> {
        self.start
    }

    pub fn end(&self) -> Option<AnchorId> {
        self.end
    }

    pub fn get(&self, id: AnchorId) -> Option<&Anchor> {
        self.anchors.get(&id)
    }

    pub fn contains(&self, id: AnchorId) -> bool {
        self.anchors.contains_key(&id)
    }

    fn allocate_id(&mut self) -> AnchorId {
        let id = AnchorId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Hängt `anchor` vorne an und gibt seine ID zurück.
    pub fn push_front(&mut self, mut anchor: Anchor) -> AnchorId {
        let id = self.allocate_id();
        anchor.set_previous(None);
        anchor.set_next(self.start);

        match self.start.and_then(|old| self.anchors.get_mut(&old)) {
            Some(old_start) => old_start.set_previous(Some(id)),
            None => self.end = Some(id),
        }

        self.start = Some(id);
        self.anchors.insert(id, anchor);
        self.length += 1;
        id
    }

    /// Hängt `anchor` hinten an und gibt seine ID zurück.
    pub fn push_back(&mut self, mut anchor: Anchor) -> AnchorId {
        let id = self.allocate_id();
        anchor.set_next(None);
        anchor.set_previous(self.end);

        match self.end.and_then(|old| self.anchors.get_mut(&old)) {
            Some(old_end) => old_end.set_next(Some(id)),
            None => self.start = Some(id),
        }

        self.end = Some(id);
        self.anchors.insert(id, anchor);
        self.length += 1;
        id
    }

    /// Entfernt den ersten Anker. Leere Kette → `None`.
    ///
    /// Der zurückgegebene Anker ist isoliert (keine Links, Handles deaktiviert).
    pub fn pop_front(&mut self) -> Option<Anchor> {
        let id = self.start?;
        let mut anchor = self.anchors.remove(&id)?;

        match anchor.next().and_then(|n| self.anchors.get_mut(&n).map(|a| (n, a))) {
            Some((next_id, next)) => {
                next.set_previous(None);
                self.start = Some(next_id);
            }
            None => {
                self.start = None;
                self.end = None;
            }
        }

        anchor.set_previous(None);
        anchor.set_next(None);
        self.length -= 1;
        Some(anchor)
    }

    /// Entfernt den letzten Anker. Leere Kette → `None`.
    pub fn pop_back(&mut self) -> Option<Anchor> {
        let id = self.end?;
        let mut anchor = self.anchors.remove(&id)?;

        match anchor
            .previous()
            .and_then(|p| self.anchors.get_mut(&p).map(|a| (p, a)))
        {
            Some((prev_id, prev)) => {
                prev.set_next(None);
                self.end = Some(prev_id);
            }
            None => {
                self.start = None;
                self.end = None;
            }
        }

        anchor.set_previous(None);
        anchor.set_next(None);
        self.length -= 1;
        Some(anchor)
    }

    /// Fügt `anchor` am näheren Ende der Kette ein (O(1), nur Start/Ende geprüft).
    ///
    /// Bis zu einem Anker wird immer hinten angehängt; bei exakt gleichem
    /// Abstand ebenfalls hinten.
    pub fn push_nearest(&mut self, anchor: Anchor) -> AnchorId {
        let endpoints = match (self.start, self.end) {
            (Some(s), Some(e)) if self.length > 1 => self.get(s).zip(self.get(e)),
            _ => None,
        };
        let Some((start, end)) = endpoints else {
            return self.push_back(anchor);
        };

        let to_start = anchor.distance_to(start.position_vec());
        let to_end = anchor.distance_to(end.position_vec());

        if to_start < to_end {
            self.push_front(anchor)
        } else {
            self.push_back(anchor)
        }
    }

    /// Entfernt alle Anker; IDs werden nicht wiederverwendet.
    pub fn clear(&mut self) {
        self.anchors.clear();
        self.start = None;
        self.end = None;
        self.length = 0;
    }

    /// Lazy Traversierung von `start` nach `end`.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            chain: self,
            cursor: self.start,
            remaining: self.length,
            forward: true,
        }
    }

    /// Lazy Traversierung von `end` nach `start`.
    pub fn iter_rev(&self) -> Iter<'_> {
        Iter {
            chain: self,
            cursor: self.end,
            remaining: self.length,
            forward: false,
        }
    }

    /// Alle Anker- und Handle-Punkte absolut, Reihenfolge wie `Anchor::unwrap_absolute`.
    pub fn flatten_absolute(&self) -> Vec<Vector2> {
        self.iter()
            .flat_map(|(_, anchor)| anchor.unwrap_absolute())
            .collect()
    }

    /// Live-Referenzen in derselben Reihenfolge wie `flatten_absolute`.
    pub fn flatten_live(&self) -> Vec<PointRef> {
        self.iter()
            .flat_map(|(id, anchor)| anchor.unwrap(id))
            .collect()
    }

    /// Positionen aller Anker in Kettenreihenfolge (inkl. Farb-Tag).
    pub fn node_positions(&self) -> Vec<Vector2> {
        self.iter().map(|(_, anchor)| anchor.position()).collect()
    }

    /// Absolute Positionen aller aktiven Handles in Kettenreihenfolge.
    pub fn control_points_absolute(&self) -> Vec<Vector2> {
        self.iter()
            .flat_map(|(_, anchor)| anchor.absolute_control_points())
            .collect()
    }

    /// Aktuelle absolute Position eines Anker- oder Handle-Punkts.
    pub fn position_of(&self, point: PointRef) -> Option<Vector2> {
        match point {
            PointRef::Anchor(id) => self.get(id).map(Anchor::position),
            PointRef::Handle(handle) => self
                .get(handle.anchor)
                .map(|anchor| anchor.handle_position(handle.side)),
        }
    }

    /// Nächster Anker/Handle zu `pos`, sofern näher als `max_distance`.
    ///
    /// Nur aktive Handles sind treffbar; bei Gleichstand gewinnt der in
    /// Kettenreihenfolge erste Punkt.
    pub fn nearest_point(&self, pos: Vec2, max_distance: f32) -> Option<PointHit> {
        self.flatten_live()
            .into_iter()
            .filter_map(|target| {
                let distance = self.position_of(target)?.distance_to(pos);
                Some(PointHit { target, distance })
            })
            .filter(|hit| hit.distance < max_distance)
            .min_by(|a, b| {
                a.distance
                    .partial_cmp(&b.distance)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    /// Verschiebt einen Anker (seine Handles wandern mit).
    pub fn move_anchor(&mut self, id: AnchorId, pos: impl Into<Vec2>) -> Result<(), SplineError> {
        let anchor = self
            .anchors
            .get_mut(&id)
            .ok_or(SplineError::UnknownAnchor(id))?;
        anchor.set_position(pos);
        Ok(())
    }

    /// Setzt einen Handle auf eine absolute Position; der Partner wird gespiegelt.
    pub fn set_handle_position(
        &mut self,
        handle: HandleId,
        pos: impl Into<Vec2>,
    ) -> Result<(), SplineError> {
        let anchor = self
            .anchors
            .get_mut(&handle.anchor)
            .ok_or(SplineError::UnknownAnchor(handle.anchor))?;
        anchor.set_handle_position(handle.side, pos)
    }

    /// Verschiebt einen beliebigen Punkt der Kette.
    pub fn move_point(&mut self, point: PointRef, pos: impl Into<Vec2>) -> Result<(), SplineError> {
        match point {
            PointRef::Anchor(id) => self.move_anchor(id, pos),
            PointRef::Handle(handle) => self.set_handle_position(handle, pos),
        }
    }

    /// Ein Polylinien-Sample pro Bézier-Segment.
    ///
    /// Fenster aus je 4 Punkten an den Offsets 0, 3, 6, … der absoluten
    /// Flattening-Folge; erster und letzter Punkt jedes Fensters sind Anker.
    pub fn bezier_polylines(
        &self,
        sampler: &BezierSampler,
    ) -> Result<Vec<Vec<Vector2>>, SplineError> {
        let points = self.flatten_absolute();
        segment_windows(&points)
            .map(|window| sampler.sample_points(window))
            .collect()
    }
}

/// Iterator über `(AnchorId, &Anchor)` entlang der Links.
pub struct Iter<'a> {
    chain: &'a SplineChain,
    cursor: Option<AnchorId>,
    remaining: usize,
    forward: bool,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (AnchorId, &'a Anchor);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.cursor?;
        let anchor = self.chain.anchors.get(&id)?;
        self.cursor = if self.forward {
            anchor.next()
        } else {
            anchor.previous()
        };
        self.remaining -= 1;
        Some((id, anchor))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl<'a> IntoIterator for &'a SplineChain {
    type Item = (AnchorId, &'a Anchor);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
