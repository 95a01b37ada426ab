//! Session-Zustand eines Linienweg-Editors.

use super::history::{EditHistory, Snapshot};
use super::neighbor_resolver::{NeighborRequest, NeighborResolver};
use super::CommandLog;
use crate::core::{
    AddType, CopyPreview, CopyRange, NeighborCandidate, PathDirection, RoutePath, TransitType,
};
use crate::shared::EditorOptions;
use indexmap::IndexMap;
use std::sync::Arc;

/// Fortschritt der Nachbarsuche
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
    /// Keine Suche aktiv
    #[default]
    Idle,
    /// Anfrage ausgegeben, Antwort steht aus
    Pending,
    /// Antwort übernommen, Bediener wählt (auch bei null Kandidaten)
    AwaitingInput,
}

/// Kandidaten der aktuellen Nachbarsuche
#[derive(Debug, Clone, Default)]
pub struct NeighborState {
    /// Angebotene Segmente, häufig genutzte zuerst
    pub candidates: Vec<NeighborCandidate>,
    /// Seite, an der die Kandidaten angefügt werden
    pub add_type: Option<AddType>,
    /// Randknoten der Suche
    pub boundary_node_id: Option<u64>,
    /// Fortschritt
    pub status: SearchStatus,
}

impl NeighborState {
    /// Findet einen angebotenen Kandidaten per Segment-ID
    pub fn candidate(&self, segment_id: u64) -> Option<&NeighborCandidate> {
        self.candidates.iter().find(|c| c.segment.id == segment_id)
    }
}

/// Aktive Kopier-Vorschau
#[derive(Debug, Clone, PartialEq)]
pub struct CopyPreviewState {
    /// Gewählte Teilstrecke
    pub range: CopyRange,
    /// Kopierte und verworfene Segmente
    pub preview: CopyPreview,
}

/// Dringlichkeit eines Hinweises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Information
    Info,
    /// Warnung (Abfrage fehlgeschlagen, Segment abgelehnt)
    Warning,
}

/// Für den Bediener sichtbarer Hinweis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Dringlichkeit
    pub level: NotificationLevel,
    /// Meldungstext
    pub message: String,
}

/// Eine Bearbeitungssession: besitzt genau einen Linienweg und seinen Hilfszustand.
///
/// Mehrere Sessions teilen keinen Zustand.
pub struct PathSession {
    /// Bearbeiteter Linienweg (Arc für O(1)-Snapshots)
    pub path: Arc<RoutePath>,
    /// Registrierte Quell-Linienwege zum Kopieren, nach Schlüssel
    pub source_paths: IndexMap<String, RoutePath>,
    /// Generation der Nachbarsuchen
    pub resolver: NeighborResolver,
    /// Kandidaten der aktuellen Suche
    pub neighbors: NeighborState,
    /// Aktive Kopier-Vorschau
    pub copy_preview: Option<CopyPreviewState>,
    /// Hinweise für den Bediener (älteste zuerst)
    pub notifications: Vec<Notification>,
    /// Undo/Redo-Verlauf
    pub history: EditHistory,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Ausgegebene, noch nicht abgeholte Nachbaranfrage
    pending_request: Option<NeighborRequest>,
}

impl PathSession {
    const MAX_NOTIFICATIONS: usize = 100;

    /// Session mit leerem Linienweg
    pub fn new(
        route_id: impl Into<String>,
        direction: PathDirection,
        transit_type: TransitType,
    ) -> Self {
        Self::with_path(
            RoutePath::new(route_id, direction, transit_type),
            EditorOptions::default(),
        )
    }

    /// Session für einen vorhandenen (z.B. geladenen) Linienweg
    pub fn with_path(path: RoutePath, options: EditorOptions) -> Self {
        let history = EditHistory::new_with_capacity(options.history_depth);
        Self {
            path: Arc::new(path),
            source_paths: IndexMap::new(),
            resolver: NeighborResolver::new(),
            neighbors: NeighborState::default(),
            copy_preview: None,
            notifications: Vec::new(),
            history,
            command_log: CommandLog::new(),
            options,
            pending_request: None,
        }
    }

    /// Registriert einen Quell-Linienweg für Kopier-Operationen
    pub fn register_source_path(&mut self, key: impl Into<String>, path: RoutePath) {
        let key = key.into();
        log::info!("Quell-Linienweg '{}' registriert ({} Segmente)", key, path.len());
        self.source_paths.insert(key, path);
    }

    /// Schreibzugriff auf den Linienweg (CoW: klont nur, wenn ein Snapshot ihn teilt)
    pub fn path_mut(&mut self) -> &mut RoutePath {
        Arc::make_mut(&mut self.path)
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Linienwegs.
    pub fn record_undo_snapshot(&mut self) {
        self.history.record_snapshot(Snapshot::of(&self.path));
    }

    /// Verwirft Kandidaten und bricht laufende Suchen ab.
    pub fn reset_neighbor_search(&mut self) {
        self.resolver.cancel();
        self.pending_request = None;
        self.neighbors = NeighborState::default();
    }

    /// Merkt eine ausgegebene Nachbaranfrage vor
    pub(crate) fn set_pending_request(&mut self, request: NeighborRequest) {
        self.pending_request = Some(request);
    }

    /// Holt die ausgegebene Nachbaranfrage ab, um sie außerhalb der Session auszuführen.
    pub fn take_neighbor_request(&mut self) -> Option<NeighborRequest> {
        self.pending_request.take()
    }

    /// Fügt einen Hinweis hinzu.
    /// Begrenzt auf MAX_NOTIFICATIONS, die ältere Hälfte wird dann verworfen.
    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        if self.notifications.len() >= Self::MAX_NOTIFICATIONS {
            self.notifications.drain(..Self::MAX_NOTIFICATIONS / 2);
        }
        self.notifications.push(Notification {
            level,
            message: message.into(),
        });
    }

    /// Entnimmt alle Hinweise
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}
