use crate::core::PointRef;
use crate::shared::EditorOptions;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Drag auf einem getroffenen Anker/Handle beginnen
    BeginDrag { target: PointRef },
    /// Neuen Anker am näheren Kettenende einfügen
    InsertAnchor { pos: Vec2 },
    /// Gezogenen Punkt auf Position setzen
    DragTo { pos: Vec2 },
    /// Drag beenden
    EndDrag,
    /// Spline verwerfen
    ResetSpline,
    /// Anwendung beenden
    RequestExit,
    /// Optionen-Dialog ein-/ausblenden
    ToggleOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: EditorOptions },
}
