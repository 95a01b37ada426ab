use crate::core::{CopyRange, NeighborSearchTarget, PathEnd, Segment};

/// Commands sind mutierende Schritte, die zentral vom Controller ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand {
    /// Segment an den Endknoten anhängen
    AppendSegment { segment: Segment },
    /// Segment vor den Startknoten setzen
    PrependSegment { segment: Segment },
    /// Äußerstes Segment an einem Ende entfernen
    RemoveBoundary { end: PathEnd },
    /// Teilstrecke eines Quell-Linienwegs einfügen
    InsertCopiedRange { range: CopyRange },
    /// Nachbarsuche am Randknoten starten
    RequestNeighbors { target: NeighborSearchTarget },
    /// Kandidaten verwerfen, laufende Suche abbrechen
    ClearNeighbors,
    /// Endmarkierung setzen oder entfernen
    SetTerminal { terminal: bool },
    /// Kopier-Vorschau berechnen
    PreviewCopyRange { range: CopyRange },
    /// Kopier-Vorschau verwerfen
    ClearCopyPreview,
    /// Undo
    Undo,
    /// Redo
    Redo,
}
