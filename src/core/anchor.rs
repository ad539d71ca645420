//! Anker: Stützpunkt der Spline mit zwei gekoppelten Handles.

use super::{Handle, HandleId, HandlePair, HandleSide, SplineError, Vector2};
use super::vector::Color;
use glam::Vec2;
use std::fmt;

/// Standard-Farbe neuer Anker (RGBA: Blau).
pub const ANCHOR_COLOR: Color = [0.0, 0.0, 1.0, 1.0];

/// Standard-Offset des Prev-Handles eines neuen Ankers.
pub const DEFAULT_HANDLE_OFFSET: Vec2 = Vec2::new(0.0, 50.0);

/// Stabile ID eines Ankers innerhalb einer `SplineChain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnchorId(pub u64);

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Live-Referenz auf einen Punkt der Kette (Anker oder Handle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointRef {
    Anchor(AnchorId),
    Handle(HandleId),
}

/// Stützpunkt der Spline.
///
/// `previous`/`next` sind nicht-besitzende Verweise; die Kette ist alleiniger
/// Besitzer aller Anker. Der Enabled-Zustand der Handles folgt den Links:
/// `handle_prev` ist genau dann aktiv, wenn ein Vorgänger existiert, analog
/// `handle_next` mit dem Nachfolger.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    position: Vector2,
    handles: HandlePair,
    previous: Option<AnchorId>,
    next: Option<AnchorId>,
}

impl Anchor {
    /// Neuer, isolierter Anker bei `(x, y)` mit Standard-Farbe.
    pub fn new(x: f32, y: f32) -> Self {
        Self::with_color(x, y, ANCHOR_COLOR)
    }

    pub fn with_color(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: Vector2::with_color(x, y, color),
            handles: HandlePair::paired_with_offset(HandleSide::Prev, DEFAULT_HANDLE_OFFSET),
            previous: None,
            next: None,
        }
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn position_vec(&self) -> Vec2 {
        self.position.as_vec2()
    }

    /// Verschiebt den Anker; Handles wandern mit, da sie relativ gespeichert sind.
    pub fn set_position(&mut self, position: impl Into<Vec2>) {
        let position = position.into();
        self.position.x = position.x;
        self.position.y = position.y;
    }

    pub fn distance_to(&self, p: impl Into<Vec2>) -> f32 {
        self.position.distance_to(p)
    }

    pub fn handles(&self) -> &HandlePair {
        &self.handles
    }

    pub fn handle(&self, side: HandleSide) -> &Handle {
        self.handles.get(side)
    }

    /// Setzt den relativen Offset eines Handles (Partner wird gespiegelt).
    pub fn set_handle_offset(
        &mut self,
        side: HandleSide,
        offset: Vec2,
    ) -> Result<(), SplineError> {
        self.handles.set_offset(side, offset)
    }

    /// Setzt einen Handle auf eine absolute Position (Partner wird gespiegelt).
    pub fn set_handle_position(
        &mut self,
        side: HandleSide,
        position: impl Into<Vec2>,
    ) -> Result<(), SplineError> {
        let anchor_position = self.position_vec();
        self.handles.set_position(side, position, anchor_position)
    }

    /// Absolute Position eines Handles, unabhängig vom Enabled-Zustand.
    pub fn handle_position(&self, side: HandleSide) -> Vector2 {
        self.handles.get(side).absolute_position(self.position_vec())
    }

    pub fn previous(&self) -> Option<AnchorId> {
        self.previous
    }

    pub fn next(&self) -> Option<AnchorId> {
        self.next
    }

    /// Setzt den Vorgänger-Link und leitet `handle_prev.enabled` neu ab.
    pub fn set_previous(&mut self, previous: Option<AnchorId>) {
        self.previous = previous;
        self.handles.set_enabled(HandleSide::Prev, self.previous.is_some());
    }

    /// Setzt den Nachfolger-Link und leitet `handle_next.enabled` neu ab.
    pub fn set_next(&mut self, next: Option<AnchorId>) {
        self.next = next;
        self.handles.set_enabled(HandleSide::Next, self.next.is_some());
    }

    /// True wenn Vorgänger und Nachfolger existieren.
    pub fn is_intermediate(&self) -> bool {
        self.previous.is_some() && self.next.is_some()
    }

    /// Absolute Punkte in Reihenfolge `[handle_prev?, anker, handle_next?]`.
    ///
    /// Liefert frische Werte; es werden keine Referenzen erhalten.
    pub fn unwrap_absolute(&self) -> Vec<Vector2> {
        let mut points = Vec::with_capacity(3);
        if self.handle(HandleSide::Prev).is_enabled() {
            points.push(self.handle_position(HandleSide::Prev));
        }
        points.push(self.position);
        if self.handle(HandleSide::Next).is_enabled() {
            points.push(self.handle_position(HandleSide::Next));
        }
        points
    }

    /// Live-Referenzen in derselben Slot-Reihenfolge wie `unwrap_absolute`.
    pub fn unwrap(&self, id: AnchorId) -> Vec<PointRef> {
        let mut points = Vec::with_capacity(3);
        if self.handle(HandleSide::Prev).is_enabled() {
            points.push(PointRef::Handle(HandleId {
                anchor: id,
                side: HandleSide::Prev,
            }));
        }
        points.push(PointRef::Anchor(id));
        if self.handle(HandleSide::Next).is_enabled() {
            points.push(PointRef::Handle(HandleId {
                anchor: id,
                side: HandleSide::Next,
            }));
        }
        points
    }

    /// Absolute Positionen der aktiven Handles (ohne den Anker selbst).
    pub fn absolute_control_points(&self) -> Vec<Vector2> {
        self.handles
            .iter()
            .filter(|(_, handle)| handle.is_enabled())
            .map(|(side, _)| self.handle_position(side))
            .collect()
    }
}
