//! Integrationstests für das Ziehen von Ankern und Handles:
//! - Anker-Drag verschiebt Handles mit
//! - Handle-Drag hält das Partner-Handle antipodal
//! - Drag endet mit dem Loslassen

use approx::assert_abs_diff_eq;
use glam::Vec2;
use spline_editor::{AppController, AppIntent, AppState, HandleId, HandleSide, PointRef};

/// Zwei Anker bei (100, 300) und (400, 300), per Klick gesetzt.
fn two_anchor_state(controller: &mut AppController) -> AppState {
    let mut state = AppState::new();
    for x in [100.0, 400.0] {
        controller
            .handle_intent(
                &mut state,
                AppIntent::PrimaryPressed {
                    pos: Vec2::new(x, 300.0),
                },
            )
            .expect("Einfügen sollte klappen");
    }
    state
}

fn drag(controller: &mut AppController, state: &mut AppState, from: Vec2, to: Vec2) {
    controller
        .handle_intent(state, AppIntent::PrimaryPressed { pos: from })
        .expect("Drücken sollte klappen");
    controller
        .handle_intent(state, AppIntent::PointerMoved { pos: to })
        .expect("Ziehen sollte klappen");
    controller
        .handle_intent(state, AppIntent::PrimaryReleased { pos: to })
        .expect("Loslassen sollte klappen");
}

#[test]
fn test_anchor_drag_moves_handles_along() {
    let mut controller = AppController::new();
    let mut state = two_anchor_state(&mut controller);
    let first = state.chain.start().expect("Start vorhanden");

    drag(
        &mut controller,
        &mut state,
        Vec2::new(100.0, 300.0),
        Vec2::new(150.0, 250.0),
    );

    let anchor = state.chain.get(first).expect("Anker vorhanden");
    assert_eq!(anchor.position_vec(), Vec2::new(150.0, 250.0));
    assert_eq!(
        anchor.handle_position(HandleSide::Next).as_vec2(),
        Vec2::new(150.0, 200.0)
    );
    assert!(state.drag.is_none());
    assert_eq!(state.chain.len(), 2);
}

#[test]
fn test_handle_drag_keeps_partner_antipodal() {
    let mut controller = AppController::new();
    let mut state = two_anchor_state(&mut controller);
    let first = state.chain.start().expect("Start vorhanden");

    // Next-Handle des ersten Ankers liegt bei (100, 250)
    drag(
        &mut controller,
        &mut state,
        Vec2::new(100.0, 250.0),
        Vec2::new(160.0, 280.0),
    );

    let anchor = state.chain.get(first).expect("Anker vorhanden");
    let next = anchor.handle(HandleSide::Next);
    let prev = anchor.handle(HandleSide::Prev);
    assert_abs_diff_eq!(next.x(), 60.0);
    assert_abs_diff_eq!(next.y(), -20.0);
    assert_abs_diff_eq!(prev.x(), -next.x());
    assert_abs_diff_eq!(prev.y(), -next.y());
    assert_eq!(anchor.position_vec(), Vec2::new(100.0, 300.0));
}

#[test]
fn test_pointer_move_without_press_changes_nothing() {
    let mut controller = AppController::new();
    let mut state = two_anchor_state(&mut controller);
    let before = state.chain.flatten_absolute();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                pos: Vec2::new(100.0, 300.0),
            },
        )
        .expect("Bewegung sollte klappen");

    assert_eq!(state.chain.flatten_absolute(), before);
}

#[test]
fn test_drag_target_is_handle_reference() {
    let mut controller = AppController::new();
    let mut state = two_anchor_state(&mut controller);
    let end = state.chain.end().expect("Ende vorhanden");

    // Prev-Handle des letzten Ankers liegt bei (400, 350)
    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryPressed {
                pos: Vec2::new(402.0, 352.0),
            },
        )
        .expect("Drücken sollte klappen");

    assert_eq!(
        state.drag,
        Some(PointRef::Handle(HandleId {
            anchor: end,
            side: HandleSide::Prev,
        }))
    );
}

#[test]
fn test_curve_follows_dragged_anchor() {
    let mut controller = AppController::new();
    let mut state = two_anchor_state(&mut controller);

    drag(
        &mut controller,
        &mut state,
        Vec2::new(400.0, 300.0),
        Vec2::new(500.0, 100.0),
    );

    let scene = controller.build_render_scene(&state, [800.0, 600.0]);
    let last = scene.curves[0].last().expect("Kurve hat Samples");
    assert_eq!(last.as_vec2(), Vec2::new(500.0, 100.0));
}
