//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::PointRef;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Anker: {} | Segmente: {}",
                state.anchor_count(),
                state.anchor_count().saturating_sub(1)
            ));

            ui.separator();

            match state.drag {
                Some(PointRef::Anchor(id)) => ui.label(format!("Ziehe Anker {}", id)),
                Some(PointRef::Handle(handle)) => {
                    ui.label(format!("Ziehe {:?}-Handle von Anker {}", handle.side, handle.anchor))
                }
                None => ui.label("Klick: Anker setzen | Ziehen: verschieben"),
            };

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label("E: Neu | O: Optionen | Esc/Q: Beenden");
            });
        });
    });
}
