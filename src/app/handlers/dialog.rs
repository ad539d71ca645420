//! Handler für Anwendungssteuerung und Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    log::info!("Beenden angefordert");
    state.should_exit = true;
}

/// Blendet den Optionen-Dialog ein oder aus.
pub fn toggle_options_dialog(state: &mut AppState) {
    state.show_options_dialog = !state.show_options_dialog;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
///
/// Ungültige Optionen (z.B. 0 Bézier-Segmente) werden abgelehnt, der alte
/// Zustand bleibt erhalten.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    options.sampler()?;
    state.options = options;
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}
