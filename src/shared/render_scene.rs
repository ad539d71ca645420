//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::Vector2;

/// Hilfslinie von einem Anker zu einem seiner aktiven Handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideLine {
    pub anchor: Vector2,
    pub handle: Vector2,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Ankerpositionen in Kettenreihenfolge (mit Farb-Tag)
    pub anchors: Vec<Vector2>,
    /// Absolute Positionen aller aktiven Handles
    pub handles: Vec<Vector2>,
    /// Eine Polylinie pro Bézier-Segment
    pub curves: Vec<Vec<Vector2>>,
    /// Tangenten-Hilfslinien, pro Anker erst Next- dann Prev-Handle
    pub guides: Vec<GuideLine>,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt `true` zurück, wenn nichts zu zeichnen ist.
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Gesamtzahl der Kurven-Samples über alle Segmente.
    pub fn curve_sample_count(&self) -> usize {
        self.curves.iter().map(Vec::len).sum()
    }
}
