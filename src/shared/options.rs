//! Zentrale Konfiguration für den Spline-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{BezierSampler, Color, SplineError, DEFAULT_BEZIER_SEGMENTS};
use serde::{Deserialize, Serialize};

// ── Fenster ─────────────────────────────────────────────────────────

/// Standard-Fensterbreite in Pixeln.
pub const WINDOW_WIDTH: f32 = 800.0;
/// Standard-Fensterhöhe in Pixeln.
pub const WINDOW_HEIGHT: f32 = 600.0;
/// Fenstertitel.
pub const WINDOW_TITLE: &str = "Spline Editor";
/// Multisampling-Rate des Fensters.
pub const MULTISAMPLING: u16 = 4;

// ── Punkte & Linien ─────────────────────────────────────────────────

/// Durchmesser von Anker- und Handle-Punkten in Pixeln.
pub const POINT_SIZE: f32 = 15.0;
/// Linienstärke der Kurve in Pixeln.
pub const LINE_WIDTH: f32 = 5.0;
/// Vielfaches der Punktgröße, das noch als Treffer zählt.
pub const HIT_TOLERANCE: f32 = 2.0;
/// Strichlänge der Tangenten-Hilfslinien in Pixeln.
pub const GUIDE_DASH_LENGTH: f32 = 4.0;

// ── Farben ──────────────────────────────────────────────────────────

/// Hintergrundfarbe (RGBA: Weiß).
pub const BACKGROUND_COLOR: Color = [1.0, 1.0, 1.0, 1.0];
/// Fallback-Farbe für Anker ohne eigenes Farb-Tag (RGBA: Schwarz).
pub const ANCHOR_FALLBACK_COLOR: Color = [0.0, 0.0, 0.0, 1.0];
/// Farbe der Handles (RGBA: Schwarz).
pub const HANDLE_COLOR: Color = [0.0, 0.0, 0.0, 1.0];
/// Farbe der Kurve (RGBA: Schwarz).
pub const CURVE_COLOR: Color = [0.0, 0.0, 0.0, 1.0];
/// Farbe der Tangenten-Hilfslinien (RGBA: Türkis).
pub const GUIDE_COLOR: Color = [0.0, 0.8, 0.6, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `spline_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Fenster ─────────────────────────────────────────────────
    /// Fensterbreite beim Start
    pub window_width: f32,
    /// Fensterhöhe beim Start
    pub window_height: f32,

    // ── Punkte & Linien ─────────────────────────────────────────
    /// Punktgröße in Pixeln
    pub point_size: f32,
    /// Linienstärke der Kurve
    pub line_width: f32,
    /// Trefferradius als Vielfaches der Punktgröße
    pub hit_tolerance: f32,
    /// Segmente pro Bézier-Kurve
    pub bezier_segments: usize,
    /// Strichlänge der Tangenten-Hilfslinien
    pub guide_dash_length: f32,

    // ── Farben ──────────────────────────────────────────────────
    pub background_color: Color,
    /// Farbe für Anker ohne Farb-Tag
    pub anchor_fallback_color: Color,
    pub handle_color: Color,
    pub curve_color: Color,
    pub guide_color: Color,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,

            point_size: POINT_SIZE,
            line_width: LINE_WIDTH,
            hit_tolerance: HIT_TOLERANCE,
            bezier_segments: DEFAULT_BEZIER_SEGMENTS,
            guide_dash_length: GUIDE_DASH_LENGTH,

            background_color: BACKGROUND_COLOR,
            anchor_fallback_color: ANCHOR_FALLBACK_COLOR,
            handle_color: HANDLE_COLOR,
            curve_color: CURVE_COLOR,
            guide_color: GUIDE_COLOR,
        }
    }
}

impl EditorOptions {
    /// Sampler mit der konfigurierten Segmentanzahl.
    pub fn sampler(&self) -> Result<BezierSampler, SplineError> {
        BezierSampler::new(self.bezier_segments)
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("spline_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("spline_editor.toml")
    }

    /// Trefferradius für Hit-Tests in Pixeln.
    ///
    /// `hit_tolerance * point_size`
    pub fn hit_radius(&self) -> f32 {
        self.hit_tolerance * self.point_size
    }
}
