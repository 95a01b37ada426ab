use crate::core::{CopyRange, PathEnd};

/// Interaktions-Events aus der Kartenansicht.
/// Events sind Eingaben ohne eigene Mutationslogik; der Controller übersetzt sie in Commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionEvent {
    /// Knoten angeklickt. `boundary` ist das Wegende, falls der Knoten als Randknoten markiert war.
    NodeSelected {
        node_id: u64,
        boundary: Option<PathEnd>,
    },
    /// Angebotenes Nachbarsegment angeklickt
    SegmentSelected { segment_id: u64 },
    /// Teilstrecke eines anderen Linienwegs zum Kopieren gewählt
    CopyRangeSelected {
        source_path_key: String,
        start_node_id: u64,
        end_node_id: u64,
    },
    /// Äußerstes Segment an einem Ende entfernen
    BoundaryRemovalRequested { end: PathEnd },
    /// Endmarkierung umschalten
    TerminalToggled,
    /// Vorschau einer Kopier-Auswahl anzeigen
    CopyPreviewRequested { range: CopyRange },
    /// Kopier-Vorschau schließen
    CopyPreviewCleared,
    /// Letzte Änderung rückgängig machen
    UndoRequested,
    /// Rückgängig gemachte Änderung wiederholen
    RedoRequested,
}
