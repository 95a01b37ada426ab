//! Fehlertypen der Linienweg-Engine.
//!
//! Keiner dieser Fehler ist fatal: Die Session wandelt sie in Hinweise,
//! geleerte Kandidatenlisten oder leere Kopier-Vorschauen um.

use super::TransitType;
use thiserror::Error;

/// Grund, warum ein Segment nicht eingefügt werden kann
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSegmentReason {
    /// Segment schließt nicht an den erwarteten Randknoten an
    NotContiguous {
        /// Erwarteter Anschlussknoten
        expected_node_id: u64,
        /// Tatsächlicher Knoten am Segment
        actual_node_id: u64,
    },
    /// Verkehrsmittel passt nicht zum Linienweg
    TransitTypeMismatch {
        /// Verkehrsmittel des Linienwegs
        expected: TransitType,
        /// Verkehrsmittel des Segments
        actual: TransitType,
    },
    /// Segment-ID ist im Linienweg bereits vorhanden
    DuplicateSegment,
    /// Linienweg ist abgeschlossen (Endmarkierung gesetzt)
    PathClosed,
}

impl std::fmt::Display for InvalidSegmentReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotContiguous {
                expected_node_id,
                actual_node_id,
            } => write!(
                f,
                "erwartet Anschluss an Knoten {}, Segment liegt an Knoten {}",
                expected_node_id, actual_node_id
            ),
            Self::TransitTypeMismatch { expected, actual } => write!(
                f,
                "Verkehrsmittel {:?} passt nicht zu {:?}",
                actual, expected
            ),
            Self::DuplicateSegment => write!(f, "Segment ist bereits Teil des Linienwegs"),
            Self::PathClosed => write!(f, "Linienweg ist abgeschlossen"),
        }
    }
}

/// Fehler der Linienweg-Engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// Nachbar-/Graph-Abfrage fehlgeschlagen (Netzwerk oder Dienst)
    #[error("Graph-Abfrage fehlgeschlagen: {message}")]
    GraphFetch {
        /// Fehlermeldung des Dienstes
        message: String,
    },
    /// Einfügen verletzt die Anschlussbedingung
    #[error("Segment {segment_id} kann nicht eingefügt werden: {reason}")]
    InvalidSegment {
        /// Betroffenes Segment
        segment_id: u64,
        /// Ablehnungsgrund
        reason: InvalidSegmentReason,
    },
    /// Mindestens ein Knoten fehlt im Quell-Linienweg
    #[error(
        "Kein Segment zwischen Knoten {start_node_id} und {end_node_id} in '{source_path}' gefunden"
    )]
    CopyRangeNotFound {
        /// Schlüssel des Quell-Linienwegs
        source_path: String,
        /// Gewählter Startknoten
        start_node_id: u64,
        /// Gewählter Endknoten
        end_node_id: u64,
    },
}

impl PathError {
    /// Erstellt einen GraphFetch-Fehler aus einem beliebigen Dienstfehler.
    pub fn graph_fetch(source: &anyhow::Error) -> Self {
        Self::GraphFetch {
            message: format!("{:#}", source),
        }
    }

    /// Erstellt einen InvalidSegment-Fehler.
    pub fn invalid(segment_id: u64, reason: InvalidSegmentReason) -> Self {
        Self::InvalidSegment { segment_id, reason }
    }
}
