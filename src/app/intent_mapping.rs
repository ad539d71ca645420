//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PrimaryPressed { pos } => {
            let max_distance = state.options.hit_radius();
            match state.chain.nearest_point(pos, max_distance) {
                Some(hit) => vec![AppCommand::BeginDrag { target: hit.target }],
                None => vec![AppCommand::InsertAnchor { pos }],
            }
        }
        AppIntent::PointerMoved { pos } => {
            if state.is_dragging() {
                vec![AppCommand::DragTo { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PrimaryReleased { .. } => {
            if state.is_dragging() {
                vec![AppCommand::EndDrag]
            } else {
                vec![]
            }
        }
        AppIntent::ResetRequested => vec![AppCommand::ResetSpline],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::OptionsDialogToggled => vec![AppCommand::ToggleOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}
