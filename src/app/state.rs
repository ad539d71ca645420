//! Application State: zentrale Datenhaltung der Editier-Sitzung.

use super::CommandLog;
use crate::core::{PointRef, SplineChain};
use crate::shared::EditorOptions;

/// Hauptzustand der Anwendung
#[derive(Debug)]
pub struct AppState {
    /// Die bearbeitete Kurve
    pub chain: SplineChain,
    /// Aktuell gezogener Anker/Handle
    pub drag: Option<PointRef>,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Log ausgeführter Commands
    pub command_log: CommandLog,
    /// Optionen-Dialog sichtbar
    pub show_options_dialog: bool,
    /// Anwendung soll im nächsten Frame beendet werden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen leeren Editor-Zustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            chain: SplineChain::new(),
            drag: None,
            options,
            command_log: CommandLog::new(),
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Anzahl der Anker in der Kette.
    pub fn anchor_count(&self) -> usize {
        self.chain.len()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
