//! Fehlertypen des Spline-Kerns.

use super::AnchorId;
use thiserror::Error;

/// Alle Fehler, die Operationen des Spline-Datenmodells auslösen können.
///
/// Leere Ketten sind kein Fehlerfall: `pop_front`/`pop_back` liefern dort `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplineError {
    /// Handle ist bereits mit einem anderen Partner gekoppelt
    #[error("Handle ist bereits mit einem anderen Partner gekoppelt")]
    AlreadyPaired,
    /// Handle wurde vor dem Koppeln verschoben
    #[error("Handle muss vor dem Verschieben gekoppelt werden")]
    Unpaired,
    /// Steigung zwischen zwei Punkten mit gleicher x-Koordinate
    #[error("Steigung undefiniert: beide Punkte haben dieselbe x-Koordinate")]
    UndefinedSlope,
    /// Normalisierung eines Nullvektors
    #[error("Nullvektor kann nicht normalisiert werden")]
    ZeroMagnitude,
    /// Vektor-Index außerhalb von {0, 1}
    #[error("Index {0} außerhalb des Bereichs (erlaubt: 0 oder 1)")]
    IndexOutOfRange(usize),
    /// Bézier-Sampling mit falscher Anzahl Kontrollpunkte
    #[error("kubische Bézier-Kurve braucht genau 4 Kontrollpunkte, erhalten: {0}")]
    InvalidControlPointCount(usize),
    /// Bézier-Sampling mit 0 Segmenten
    #[error("Segmentanzahl muss größer als 0 sein")]
    InvalidSegmentCount,
    /// Unbekannte Ausgabeform für Bézier-Samples
    #[error("Ausgabeform '{0}' nicht unterstützt (erlaubt: point, pair)")]
    UnsupportedOutputForm(String),
    /// Anker-ID gehört nicht (mehr) zur Kette
    #[error("Anker {0} nicht in der Kette")]
    UnknownAnchor(AnchorId),
}
