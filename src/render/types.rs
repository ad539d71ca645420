//! Rendering-Typen und Koordinaten-Hilfen.

use crate::core::{Color, Vector2};
use crate::shared::EditorOptions;

/// Gemeinsamer Kontext für alle Sub-Renderer.
pub(crate) struct RenderContext<'a> {
    /// Painter des Viewports
    pub painter: &'a egui::Painter,
    /// Linke obere Ecke des Viewports in Bildschirmkoordinaten
    pub origin: egui::Pos2,
    /// Editor-Optionen (Farben, Größen, etc.)
    pub options: &'a EditorOptions,
}

impl RenderContext<'_> {
    /// Viewport-lokale Position → Bildschirmposition.
    pub fn to_screen(&self, point: &Vector2) -> egui::Pos2 {
        self.origin + egui::vec2(point.x, point.y)
    }

    /// Radius eines Anker-/Handle-Punkts in Pixeln.
    pub fn point_radius(&self) -> f32 {
        self.options.point_size * 0.5
    }
}

/// RGBA `[0, 1]` → `Color32` (sRGB, wie im Optionen-Dialog).
pub(crate) fn color32(color: Color) -> egui::Color32 {
    let [r, g, b, a] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// `Color32` → RGBA `[0, 1]`; Umkehrung von [`color32`].
pub(crate) fn from_color32(color: egui::Color32) -> Color {
    color.to_srgba_unmultiplied().map(|c| c as f32 / 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color32_converts_opaque_colors() {
        assert_eq!(color32([1.0, 1.0, 1.0, 1.0]), egui::Color32::WHITE);
        assert_eq!(color32([0.0, 0.0, 0.0, 1.0]), egui::Color32::BLACK);
        assert_eq!(color32([0.0, 0.0, 1.0, 1.0]), egui::Color32::BLUE);
        assert_eq!(
            color32([0.0, 0.8, 0.6, 1.0]),
            egui::Color32::from_rgb(0, 204, 153)
        );
    }

    #[test]
    fn color32_rounds_instead_of_truncating() {
        // 0.5 * 255 = 127.5
        let shown = color32([0.5, 0.999, 0.0, 1.0]);
        assert_eq!(shown.r(), 128, "Halbes Byte muss aufgerundet werden");
        assert_eq!(shown.g(), 255, "Fast volle Intensität darf nicht auf 254 fallen");
    }

    #[test]
    fn unchanged_color_survives_editor_round_trip() {
        let options = EditorOptions::default();
        for color in [
            options.guide_color,
            options.background_color,
            options.curve_color,
            [0.5, 0.999, 0.2, 1.0],
        ] {
            let shown = color32(color);
            let stored = from_color32(shown);
            assert_eq!(color32(stored), shown, "Anzeige darf nicht driften");
            for (before, after) in color.iter().zip(stored.iter()) {
                assert!(
                    (before - after).abs() <= 0.5 / 255.0 + f32::EPSILON,
                    "Kanal weicht um mehr als ein halbes Byte ab: {before} → {after}"
                );
            }
        }
    }
}
