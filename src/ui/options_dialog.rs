//! Optionen-Dialog für Punktgröße, Linien, Trefferradius und Farben.

use crate::app::{AppIntent, AppState};
use crate::core::Color;
use crate::render::{color32, from_color32};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(false)
        .default_width(300.0)
        .anchor(egui::Align2::RIGHT_TOP, [-8.0, 8.0])
        .show(ctx, |ui| {
            // ── Punkte ──────────────────────────────────────
            ui.collapsing("Punkte", |ui| {
                changed |= drag_value(
                    ui,
                    "Punktgröße (px):",
                    &mut opts.point_size,
                    2.0..=40.0,
                    0.5,
                );
                changed |= drag_value(
                    ui,
                    "Treffer-Toleranz:",
                    &mut opts.hit_tolerance,
                    0.5..=5.0,
                    0.05,
                );
                changed |=
                    color_edit(ui, "Anker ohne Farbe:", &mut opts.anchor_fallback_color);
                changed |= color_edit(ui, "Handles:", &mut opts.handle_color);
            });

            // ── Kurve ───────────────────────────────────────
            ui.collapsing("Kurve", |ui| {
                changed |= drag_value(
                    ui,
                    "Linienstärke (px):",
                    &mut opts.line_width,
                    0.5..=20.0,
                    0.1,
                );
                ui.horizontal(|ui| {
                    ui.label("Segmente:");
                    changed |= ui
                        .add(egui::DragValue::new(&mut opts.bezier_segments).range(1..=1000))
                        .changed();
                });
                changed |= color_edit(ui, "Kurvenfarbe:", &mut opts.curve_color);
            });

            // ── Hilfslinien ─────────────────────────────────
            ui.collapsing("Hilfslinien", |ui| {
                changed |= drag_value(
                    ui,
                    "Strichlänge (px):",
                    &mut opts.guide_dash_length,
                    1.0..=20.0,
                    0.1,
                );
                changed |= color_edit(ui, "Farbe:", &mut opts.guide_color);
                changed |= color_edit(ui, "Hintergrund:", &mut opts.background_color);
            });

            ui.separator();

            if ui.button("Schließen").clicked() {
                events.push(AppIntent::OptionsDialogToggled);
            }
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: beschriftetes DragValue für f32.
fn drag_value(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range).speed(speed))
            .changed()
    })
    .inner
}

/// Hilfsfunktion: Farb-Editor für RGBA mit Alpha.
///
/// Nutzt dieselbe Byte-Umrechnung wie der Renderer, damit unveränderte
/// Farben beim Zurückschreiben nicht driften.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut Color) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = color32(*color);
        let changed = ui.color_edit_button_srgba(&mut c).changed();
        if changed {
            *color = from_color32(c);
        }
        changed
    })
    .inner
}
