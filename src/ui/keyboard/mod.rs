//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tasten und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// `E` setzt die Kurve zurück, `O` schaltet den Optionen-Dialog um,
/// `Escape` oder `Q` beendet die Anwendung.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (key_e_pressed, key_o_pressed, key_q_pressed, key_escape_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::E),
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::Q),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if key_e_pressed {
        events.push(AppIntent::ResetRequested);
    }

    if key_o_pressed {
        events.push(AppIntent::OptionsDialogToggled);
    }

    if key_escape_pressed || key_q_pressed {
        events.push(AppIntent::ExitRequested);
    }

    events
}
