//! Kurven- und Hilfslinien-Renderer.

use super::types::{color32, RenderContext};
use crate::core::Vector2;
use crate::shared::GuideLine;

/// Zeichnet eine Polylinie pro Bézier-Segment.
pub(crate) fn render_curves(ctx: &RenderContext, curves: &[Vec<Vector2>]) {
    let stroke = egui::Stroke::new(ctx.options.line_width, color32(ctx.options.curve_color));

    for polyline in curves {
        let points: Vec<egui::Pos2> = polyline.iter().map(|p| ctx.to_screen(p)).collect();
        ctx.painter.add(egui::Shape::line(points, stroke));
    }
}

/// Zeichnet gestrichelte Hilfslinien von Ankern zu ihren Handles.
pub(crate) fn render_guides(ctx: &RenderContext, guides: &[GuideLine]) {
    let stroke = egui::Stroke::new(1.0, color32(ctx.options.guide_color));
    let dash = ctx.options.guide_dash_length.max(1.0);

    for guide in guides {
        let path = [ctx.to_screen(&guide.anchor), ctx.to_screen(&guide.handle)];
        ctx.painter
            .extend(egui::Shape::dashed_line(&path, stroke, dash, dash));
    }
}
