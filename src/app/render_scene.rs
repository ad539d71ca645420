//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{HandleSide, SplineChain};
use crate::shared::{GuideLine, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    let sampler = state.options.sampler().unwrap_or_else(|e| {
        log::warn!("Ungültige Segmentanzahl, verwende Standard: {}", e);
        Default::default()
    });

    let curves = state.chain.bezier_polylines(&sampler).unwrap_or_else(|e| {
        log::warn!("Kurve konnte nicht gesampelt werden: {}", e);
        Vec::new()
    });

    RenderScene {
        anchors: state.chain.node_positions(),
        handles: state.chain.control_points_absolute(),
        curves,
        guides: guide_lines(&state.chain),
        viewport_size,
        options: state.options.clone(),
    }
}

/// Hilfslinien: pro Anker erst zum Next-, dann zum Prev-Handle.
fn guide_lines(chain: &SplineChain) -> Vec<GuideLine> {
    chain
        .iter()
        .flat_map(|(_, anchor)| {
            [HandleSide::Next, HandleSide::Prev]
                .into_iter()
                .filter(|&side| anchor.handle(side).is_enabled())
                .map(|side| GuideLine {
                    anchor: anchor.position(),
                    handle: anchor.handle_position(side),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::{Anchor, Vector2, ANCHOR_COLOR};

    #[test]
    fn build_empty_state_yields_empty_scene() {
        let state = AppState::new();
        let scene = build(&state, [800.0, 600.0]);

        assert!(scene.is_empty());
        assert!(scene.handles.is_empty());
        assert!(scene.curves.is_empty());
        assert!(scene.guides.is_empty());
        assert_eq!(scene.viewport_size, [800.0, 600.0]);
    }

    #[test]
    fn build_three_anchors_exposes_all_sequences() {
        let mut state = AppState::new();
        for x in [0.0, 100.0, 200.0] {
            state.chain.push_back(Anchor::new(x, 0.0));
        }

        let scene = build(&state, [800.0, 600.0]);

        assert_eq!(scene.anchors.len(), 3);
        assert!(scene.anchors.iter().all(|a| a.color == Some(ANCHOR_COLOR)));
        // 1 + 2 + 1 aktive Handles
        assert_eq!(scene.handles.len(), 4);
        assert_eq!(scene.guides.len(), 4);
        assert_eq!(scene.curves.len(), 2);
        assert_eq!(scene.curve_sample_count(), 2 * 201);
    }

    #[test]
    fn guides_list_next_handle_before_prev_handle() {
        let mut state = AppState::new();
        for x in [0.0, 100.0, 200.0] {
            state.chain.push_back(Anchor::new(x, 0.0));
        }

        let scene = build(&state, [800.0, 600.0]);
        let middle = &scene.guides[1..3];

        assert_eq!(middle[0].anchor.as_vec2(), glam::Vec2::new(100.0, 0.0));
        assert_eq!(middle[0].handle, Vector2::new(100.0, -50.0));
        assert_eq!(middle[1].handle, Vector2::new(100.0, 50.0));
    }

    #[test]
    fn build_respects_configured_segments() {
        let mut state = AppState::new();
        state.options.bezier_segments = 10;
        state.chain.push_back(Anchor::new(0.0, 0.0));
        state.chain.push_back(Anchor::new(50.0, 50.0));

        let scene = build(&state, [800.0, 600.0]);
        assert_eq!(scene.curves[0].len(), 11);
    }
}
