use crate::shared::EditorOptions;
use glam::Vec2;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Linke Maustaste gedrückt (Viewport-Koordinaten)
    PrimaryPressed { pos: Vec2 },
    /// Linke Maustaste losgelassen
    PrimaryReleased { pos: Vec2 },
    /// Mauszeiger bewegt
    PointerMoved { pos: Vec2 },
    /// Spline verwerfen und neu beginnen (Taste E)
    ResetRequested,
    /// Anwendung beenden (Escape/Q)
    ExitRequested,
    /// Optionen-Dialog ein-/ausblenden (Taste O)
    OptionsDialogToggled,
    /// Neue Optionen übernehmen
    OptionsChanged { options: EditorOptions },
}
