//! Handler für das Ziehen von Ankern und Handles.

use crate::app::AppState;
use crate::core::PointRef;
use glam::Vec2;

/// Merkt sich den getroffenen Punkt als Drag-Ziel.
pub fn begin(state: &mut AppState, target: PointRef) {
    log::debug!("Drag gestartet: {:?}", target);
    state.drag = Some(target);
}

/// Verschiebt den gezogenen Punkt; Handles bleiben antipodal gekoppelt.
pub fn drag_to(state: &mut AppState, pos: Vec2) -> anyhow::Result<()> {
    let Some(target) = state.drag else {
        return Ok(());
    };
    state.chain.move_point(target, pos)?;
    log::debug!("Drag {:?} → ({:.1}, {:.1})", target, pos.x, pos.y);
    Ok(())
}

/// Beendet den laufenden Drag.
pub fn end(state: &mut AppState) {
    if let Some(target) = state.drag.take() {
        log::debug!("Drag beendet: {:?}", target);
    }
}
