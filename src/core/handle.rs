//! Tangenten-Handles eines Ankers.
//!
//! Ein Handle speichert seine Position relativ zum besitzenden Anker. Zwei
//! Handles desselben Ankers bilden ein Paar; jede Verschiebung des einen
//! schreibt sofort den gespiegelten Offset `(-x, -y)` in den Partner. Damit
//! liegen beide Handles immer kollinear durch den Anker.

use super::{AnchorId, SplineError, Vector2};
use glam::Vec2;
use std::sync::atomic::{AtomicU64, Ordering};

/// Welcher der beiden Handles eines Ankers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleSide {
    /// Handle Richtung Vorgänger (Kurve läuft in den Anker hinein)
    Prev,
    /// Handle Richtung Nachfolger (Kurve läuft aus dem Anker heraus)
    Next,
}

impl HandleSide {
    pub fn opposite(self) -> Self {
        match self {
            HandleSide::Prev => HandleSide::Next,
            HandleSide::Next => HandleSide::Prev,
        }
    }

    fn index(self) -> usize {
        match self {
            HandleSide::Prev => 0,
            HandleSide::Next => 1,
        }
    }
}

/// Stabile Referenz auf einen Handle innerhalb einer `SplineChain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandleId {
    pub anchor: AnchorId,
    pub side: HandleSide,
}

/// Identität eines Handles, unabhängig von Offset und Zustand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandleKey(u64);

static NEXT_HANDLE_KEY: AtomicU64 = AtomicU64::new(0);

impl HandleKey {
    fn fresh() -> Self {
        Self(NEXT_HANDLE_KEY.fetch_add(1, Ordering::Relaxed))
    }
}

/// Ein einzelner Tangenten-Kontrollpunkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    key: HandleKey,
    offset: Vec2,
    enabled: bool,
    partner: Option<HandleKey>,
}

impl Handle {
    /// Ungekoppelter, deaktivierter Handle direkt auf dem Anker.
    pub fn new() -> Self {
        Self {
            key: HandleKey::fresh(),
            offset: Vec2::ZERO,
            enabled: false,
            partner: None,
        }
    }

    /// Koppelt zwei Handles gegenseitig.
    ///
    /// Erneutes Koppeln desselben Paars ist erlaubt; ist einer der beiden
    /// bereits mit einem anderen Handle gekoppelt, schlägt es fehl und
    /// beide bleiben unverändert.
    pub fn pair(a: &mut Handle, b: &mut Handle) -> Result<(), SplineError> {
        if a.key == b.key {
            return Err(SplineError::AlreadyPaired);
        }
        if a.partner.is_some_and(|p| p != b.key) || b.partner.is_some_and(|p| p != a.key) {
            return Err(SplineError::AlreadyPaired);
        }
        a.partner = Some(b.key);
        b.partner = Some(a.key);
        Ok(())
    }

    pub fn key(&self) -> HandleKey {
        self.key
    }

    /// Offset relativ zum Anker
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn x(&self) -> f32 {
        self.offset.x
    }

    pub fn y(&self) -> f32 {
        self.offset.y
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn partner(&self) -> Option<HandleKey> {
        self.partner
    }

    /// `true`, wenn `self` genau mit `other` gekoppelt ist.
    pub fn is_paired_with(&self, other: &Handle) -> bool {
        self.partner == Some(other.key)
    }

    pub fn is_paired(&self) -> bool {
        self.partner.is_some()
    }

    /// Absolute Position: Offset + Ankerposition.
    pub fn absolute_position(&self, anchor_position: Vec2) -> Vector2 {
        Vector2::from(self.offset + anchor_position)
    }

    /// Abstand der absoluten Position zu `p`.
    pub fn distance_to(&self, anchor_position: Vec2, p: impl Into<Vec2>) -> f32 {
        (self.offset + anchor_position).distance(p.into())
    }
}

impl Default for Handle {
    fn default() -> Self {
        Self::new()
    }
}

/// Die beiden Handles eines Ankers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandlePair {
    handles: [Handle; 2],
}

impl HandlePair {
    /// Zwei ungekoppelte Handles.
    pub fn new() -> Self {
        Self {
            handles: [Handle::new(), Handle::new()],
        }
    }

    /// Zwei bereits miteinander gekoppelte Handles.
    pub fn paired() -> Self {
        let [mut prev, mut next] = [Handle::new(), Handle::new()];
        prev.partner = Some(next.key);
        next.partner = Some(prev.key);
        Self {
            handles: [prev, next],
        }
    }

    /// Gekoppeltes Paar, bei dem `side` bereits auf `offset` steht.
    pub fn paired_with_offset(side: HandleSide, offset: Vec2) -> Self {
        let mut pair = Self::paired();
        pair.handles[side.index()].offset = offset;
        pair.handles[side.opposite().index()].offset = -offset;
        pair
    }

    /// Koppelt Prev und Next miteinander.
    pub fn pair(&mut self) -> Result<(), SplineError> {
        let [prev, next] = &mut self.handles;
        Handle::pair(prev, next)
    }

    pub fn get(&self, side: HandleSide) -> &Handle {
        &self.handles[side.index()]
    }

    pub fn prev(&self) -> &Handle {
        self.get(HandleSide::Prev)
    }

    pub fn next(&self) -> &Handle {
        self.get(HandleSide::Next)
    }

    pub(crate) fn set_enabled(&mut self, side: HandleSide, enabled: bool) {
        self.handles[side.index()].enabled = enabled;
    }

    /// Setzt den relativen Offset von `side` und spiegelt ihn in den Partner.
    pub fn set_offset(&mut self, side: HandleSide, offset: Vec2) -> Result<(), SplineError> {
        let (own, other) = (side.index(), side.opposite().index());
        if !self.handles[own].is_paired_with(&self.handles[other]) {
            return Err(SplineError::Unpaired);
        }
        self.handles[own].offset = offset;
        self.handles[other].offset = -offset;
        Ok(())
    }

    /// Setzt `side` auf eine absolute Position; gespeichert wird `position - anchor_position`.
    pub fn set_position(
        &mut self,
        side: HandleSide,
        position: impl Into<Vec2>,
        anchor_position: Vec2,
    ) -> Result<(), SplineError> {
        self.set_offset(side, position.into() - anchor_position)
    }

    /// Iteriert in Reihenfolge Prev, Next.
    pub fn iter(&self) -> impl Iterator<Item = (HandleSide, &Handle)> {
        [HandleSide::Prev, HandleSide::Next]
            .into_iter()
            .zip(self.handles.iter())
    }
}

impl Default for HandlePair {
    fn default() -> Self {
        Self::new()
    }
}
