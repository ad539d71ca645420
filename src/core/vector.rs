//! 2D-Punkt/Vektor mit optionalem Farb-Tag.
//!
//! Die Geometrie läuft über `glam::Vec2`; das Farb-Tag ist rein dekorativ und
//! wird von keiner Rechenoperation übernommen.

use super::SplineError;
use glam::Vec2;
use std::fmt;
use std::ops::{Add, Div, Index, Neg, Sub};

/// RGBA-Farbe (0.0–1.0 je Kanal)
pub type Color = [f32; 4];

/// Punkt bzw. Vektor in Viewport-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
    /// Optionales Anzeige-Tag, geometrisch ohne Bedeutung
    pub color: Option<Color>,
}

impl Vector2 {
    /// Erstellt einen Vektor ohne Farb-Tag.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, color: None }
    }

    /// Erstellt einen Vektor mit Farb-Tag.
    pub const fn with_color(x: f32, y: f32, color: Color) -> Self {
        Self {
            x,
            y,
            color: Some(color),
        }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn to_array(&self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Summe ohne Farb-Tag.
    pub fn add(self, other: &Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }

    /// Subtraktion; ein fehlender Operand liefert den Empfänger unverändert.
    pub fn subtract(&self, other: Option<&Vector2>) -> Vector2 {
        match other {
            Some(o) => Vector2::new(self.x - o.x, self.y - o.y),
            None => *self,
        }
    }

    pub fn negate(&self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }

    /// Euklidischer Abstand zu `p`.
    pub fn distance_to(&self, p: impl Into<Vec2>) -> f32 {
        self.as_vec2().distance(p.into())
    }

    /// Steigung dy/dx der Geraden zu `p`.
    pub fn slope_to(&self, p: impl Into<Vec2>) -> Result<f32, SplineError> {
        let p = p.into();
        let dx = self.x - p.x;
        if dx == 0.0 {
            return Err(SplineError::UndefinedSlope);
        }
        Ok((self.y - p.y) / dx)
    }

    pub fn magnitude(&self) -> f32 {
        self.as_vec2().length()
    }

    /// Normalisiert in place (Division durch den aktuellen Betrag).
    pub fn normalize(&mut self) -> Result<(), SplineError> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(SplineError::ZeroMagnitude);
        }
        self.x /= magnitude;
        self.y /= magnitude;
        Ok(())
    }

    /// Normalisierte Kopie, der Empfänger bleibt unverändert.
    pub fn normalized(&self) -> Result<Vector2, SplineError> {
        let mut copy = Vector2::new(self.x, self.y);
        copy.normalize()?;
        Ok(copy)
    }

    /// Geprüfter Koordinatenzugriff (0 = x, 1 = y).
    pub fn get(&self, index: usize) -> Result<f32, SplineError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            other => Err(SplineError::IndexOutOfRange(other)),
        }
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::add(self, &rhs)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        self.subtract(Some(&rhs))
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        self.negate()
    }
}

impl Div<f32> for Vector2 {
    type Output = Vector2;

    fn div(self, rhs: f32) -> Vector2 {
        Vector2::new(self.x / rhs, self.y / rhs)
    }
}

impl Index<usize> for Vector2 {
    type Output = f32;

    /// Panikt bei Indizes außer 0/1; `get` ist die geprüfte Variante.
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            other => panic!("Index {} außerhalb des Bereichs (erlaubt: 0 oder 1)", other),
        }
    }
}

impl From<Vec2> for Vector2 {
    fn from(v: Vec2) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Vector2::new(x, y)
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Vector2::new(x, y)
    }
}

impl From<Vector2> for Vec2 {
    fn from(v: Vector2) -> Self {
        v.as_vec2()
    }
}

impl From<&Vector2> for Vec2 {
    fn from(v: &Vector2) -> Self {
        v.as_vec2()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_arithmetic_drops_color() {
        let a = Vector2::with_color(1.0, 2.0, [1.0, 0.0, 0.0, 1.0]);
        let b = Vector2::new(3.0, 5.0);

        assert_eq!(a + b, Vector2::new(4.0, 7.0));
        assert_eq!(b - a, Vector2::new(2.0, 3.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
        assert_eq!(b / 2.0, Vector2::new(1.5, 2.5));
    }

    #[test]
    fn test_subtract_none_returns_receiver() {
        let a = Vector2::with_color(1.0, 2.0, [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(a.subtract(None), a);
    }

    #[test]
    fn test_subtract_uses_both_coordinates() {
        let a = Vector2::new(10.0, 20.0);
        let b = Vector2::new(1.0, 5.0);
        assert_eq!(a.subtract(Some(&b)), Vector2::new(9.0, 15.0));
    }

    #[test]
    fn test_distance_and_magnitude() {
        let a = Vector2::new(0.0, 0.0);
        assert_abs_diff_eq!(a.distance_to(Vec2::new(3.0, 4.0)), 5.0);
        assert_abs_diff_eq!(Vector2::new(3.0, 4.0).magnitude(), 5.0);
    }

    #[test]
    fn test_slope() {
        let a = Vector2::new(0.0, 0.0);
        assert_abs_diff_eq!(a.slope_to(Vec2::new(2.0, 4.0)).unwrap(), 2.0);
        assert_eq!(
            a.slope_to(Vec2::new(0.0, 4.0)),
            Err(SplineError::UndefinedSlope)
        );
    }

    #[test]
    fn test_normalize_in_place_and_copy() {
        let mut v = Vector2::new(3.0, 4.0);
        let copy = v.normalized().unwrap();
        assert_eq!(v, Vector2::new(3.0, 4.0), "normalized() darf nicht mutieren");
        assert_abs_diff_eq!(copy.x, 0.6, epsilon = 1e-6);
        assert_abs_diff_eq!(copy.y, 0.8, epsilon = 1e-6);

        v.normalize().unwrap();
        assert_abs_diff_eq!(v.magnitude(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_zero_vector_fails() {
        let mut v = Vector2::new(0.0, 0.0);
        assert_eq!(v.normalize(), Err(SplineError::ZeroMagnitude));
        assert!(v.normalized().is_err());
    }

    #[test]
    fn test_indexing() {
        let v = Vector2::new(7.0, 9.0);
        assert_eq!(v[0], 7.0);
        assert_eq!(v[1], 9.0);
        assert_eq!(v.get(1), Ok(9.0));
        assert_eq!(v.get(2), Err(SplineError::IndexOutOfRange(2)));
    }

    #[test]
    #[should_panic(expected = "außerhalb")]
    fn test_index_out_of_range_panics() {
        let v = Vector2::new(7.0, 9.0);
        let _ = v[2];
    }
}
