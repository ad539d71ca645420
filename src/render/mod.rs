//! Zeichnen der Render-Szene mit dem egui-Painter.

mod curve_renderer;
mod point_renderer;
mod types;

pub use crate::shared::RenderScene;
pub(crate) use types::{color32, from_color32};
use types::RenderContext;

/// Haupt-Renderer für die Spline-Szene.
///
/// Zustandslos; zeichnet pro Frame Hintergrund, Hilfslinien, Kurve, Handles
/// und Anker in dieser Reihenfolge.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new() -> Self {
        Self
    }

    /// Rendert die komplette Szene in `viewport`.
    pub fn render_scene(&self, painter: &egui::Painter, viewport: egui::Rect, scene: &RenderScene) {
        log::trace!(
            "Renderer.render_scene(): {} Anker, {} Kurven-Samples",
            scene.anchors.len(),
            scene.curve_sample_count()
        );

        let ctx = RenderContext {
            painter,
            origin: viewport.min,
            options: &scene.options,
        };

        painter.rect_filled(viewport, 0.0, color32(scene.options.background_color));

        curve_renderer::render_guides(&ctx, &scene.guides);
        curve_renderer::render_curves(&ctx, &scene.curves);
        point_renderer::render_handles(&ctx, &scene.handles);
        point_renderer::render_anchors(&ctx, &scene.anchors);
    }
}
