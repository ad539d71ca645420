//! Viewport-Input-Handling: linke Maustaste und Zeigerbewegung → AppIntent.
//!
//! Positionen werden relativ zur linken oberen Ecke des Viewports geliefert.

use super::keyboard;
use crate::app::AppIntent;

/// Verwaltet den Input-Zustand für das Viewport
#[derive(Debug, Default)]
pub struct InputState {
    /// Linke Maustaste wurde im Viewport gedrückt und noch nicht losgelassen
    primary_down: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport- und Keyboard-Events und gibt AppIntents zurück.
    ///
    /// Reihenfolge innerhalb eines Frames: Tasten, Drücken, Bewegung, Loslassen.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        // Texteingabe im Optionen-Fenster hat Vorrang vor Shortcuts
        let mut events = if ui.ctx().wants_keyboard_input() {
            Vec::new()
        } else {
            keyboard::collect_keyboard_intents(ui)
        };

        let (pressed, released, moving, pointer_pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.is_moving(),
                i.pointer.latest_pos(),
            )
        });

        let Some(pointer_pos) = pointer_pos else {
            return events;
        };
        let pos = viewport_local(pointer_pos, response.rect);

        // Klicks auf darüberliegende Fenster gehören nicht zum Viewport
        let over_viewport = response.rect.contains(pointer_pos)
            && ui
                .ctx()
                .layer_id_at(pointer_pos)
                .is_none_or(|layer| layer == ui.layer_id());

        if pressed && over_viewport {
            self.primary_down = true;
            events.push(AppIntent::PrimaryPressed { pos });
        }

        if moving {
            events.push(AppIntent::PointerMoved { pos });
        }

        if released && self.primary_down {
            self.primary_down = false;
            events.push(AppIntent::PrimaryReleased { pos });
        }

        events
    }
}

/// Bildschirmposition → Viewport-lokale Position (Ursprung oben links).
fn viewport_local(screen_pos: egui::Pos2, viewport: egui::Rect) -> glam::Vec2 {
    let local = screen_pos - viewport.min;
    glam::Vec2::new(local.x, local.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frame(
        input: &mut InputState,
        pointer_events: Vec<egui::Event>,
    ) -> (Vec<AppIntent>, egui::Rect) {
        let ctx = egui::Context::default();
        let mut raw_input = egui::RawInput::default();
        raw_input.events.extend(pointer_events);

        let mut events = Vec::new();
        let mut viewport = egui::Rect::NOTHING;
        let _ = ctx.run(raw_input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
                viewport = rect;
                events = input.collect_viewport_events(ui, &response);
            });
        });

        (events, viewport)
    }

    fn primary_button(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    #[test]
    fn press_inside_viewport_yields_local_position() {
        let mut input = InputState::new();
        let screen_pos = egui::pos2(120.0, 90.0);

        let (events, viewport) = run_frame(
            &mut input,
            vec![
                egui::Event::PointerMoved(screen_pos),
                primary_button(screen_pos, true),
            ],
        );

        let expected = viewport_local(screen_pos, viewport);
        assert!(events
            .iter()
            .any(|e| matches!(e, AppIntent::PrimaryPressed { pos } if *pos == expected)));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut input = InputState::new();
        let screen_pos = egui::pos2(120.0, 90.0);

        let (events, _) = run_frame(
            &mut input,
            vec![
                egui::Event::PointerMoved(screen_pos),
                primary_button(screen_pos, false),
            ],
        );

        assert!(!events
            .iter()
            .any(|e| matches!(e, AppIntent::PrimaryReleased { .. })));
    }

    #[test]
    fn viewport_local_subtracts_viewport_origin() {
        let viewport = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(800.0, 600.0));
        let local = viewport_local(egui::pos2(15.0, 25.0), viewport);
        assert_eq!(local, glam::Vec2::new(5.0, 5.0));
    }
}
