//! Handler für das Einfügen von Ankern und das Zurücksetzen der Kurve.

use crate::app::AppState;
use crate::core::{Anchor, SplineChain};
use glam::Vec2;

/// Fügt einen neuen Anker am näheren Kettenende ein.
pub fn insert_anchor(state: &mut AppState, pos: Vec2) {
    let id = state.chain.push_nearest(Anchor::new(pos.x, pos.y));
    let at_front = state.chain.start() == Some(id) && state.chain.len() > 1;
    log::info!(
        "Anker {} bei ({:.1}, {:.1}) {} eingefügt ({} Anker)",
        id,
        pos.x,
        pos.y,
        if at_front { "vorne" } else { "hinten" },
        state.chain.len()
    );
}

/// Verwirft die Kurve und beendet einen laufenden Drag.
pub fn reset_spline(state: &mut AppState) {
    let removed = state.chain.len();
    state.chain = SplineChain::new();
    state.drag = None;
    log::info!("Spline zurückgesetzt ({} Anker verworfen)", removed);
}
