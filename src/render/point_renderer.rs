//! Punkt-Renderer für Anker und Handles.

use super::types::{color32, RenderContext};
use crate::core::Vector2;

/// Zeichnet Anker als gefüllte Kreise in ihrer Farb-Markierung.
pub(crate) fn render_anchors(ctx: &RenderContext, anchors: &[Vector2]) {
    let radius = ctx.point_radius();
    for anchor in anchors {
        let color = anchor.color.unwrap_or(ctx.options.anchor_fallback_color);
        ctx.painter
            .circle_filled(ctx.to_screen(anchor), radius, color32(color));
    }
}

/// Zeichnet Handles als Kreise mit Umriss.
pub(crate) fn render_handles(ctx: &RenderContext, handles: &[Vector2]) {
    let radius = ctx.point_radius() * 0.8;
    let color = color32(ctx.options.handle_color);
    for handle in handles {
        let center = ctx.to_screen(handle);
        ctx.painter
            .circle(center, radius, egui::Color32::TRANSPARENT, egui::Stroke::new(2.0, color));
    }
}
