//! Use-Case: Nachbarsuche an einem Randknoten.

use crate::app::neighbor_resolver::{NeighborResolver, NeighborResponse};
use crate::app::state::{NeighborState, NotificationLevel, SearchStatus};
use crate::app::PathSession;
use crate::core::{NeighborSearchTarget, PathState};
use crate::graph::GraphQueryService;

/// Gibt eine neue Nachbaranfrage aus und verdrängt jede laufende.
///
/// Auf einem abgeschlossenen Linienweg wird nicht gesucht.
pub fn begin_search(session: &mut PathSession, target: NeighborSearchTarget) {
    if session.path.state() == PathState::Closed {
        log::debug!("Keine Nachbarsuche: Linienweg ist abgeschlossen");
        session.reset_neighbor_search();
        return;
    }

    let request = session.resolver.begin(&session.path, target);
    session.neighbors = NeighborState {
        candidates: Vec::new(),
        add_type: Some(request.query.add_type),
        boundary_node_id: Some(target.node_id),
        status: SearchStatus::Pending,
    };
    session.set_pending_request(request);
}

/// Übernimmt eine Antwort, sofern sie noch aktuell ist. Gibt zurück, ob sie übernommen wurde.
pub fn apply_response(session: &mut PathSession, response: NeighborResponse) -> bool {
    let Some(result) = session.resolver.accept(response) else {
        return false;
    };

    session.neighbors.status = SearchStatus::AwaitingInput;
    match result {
        Ok(segments) => {
            log::info!(
                "{} Nachbarsegmente an Knoten {:?} ({:?})",
                segments.candidates.len(),
                session.neighbors.boundary_node_id,
                segments.add_type
            );
            if segments.candidates.is_empty() {
                session.notify(
                    NotificationLevel::Info,
                    "Keine passenden Nachbarsegmente gefunden",
                );
            }
            session.neighbors.add_type = Some(segments.add_type);
            session.neighbors.candidates = segments.candidates;
        }
        Err(e) => {
            session.neighbors.candidates.clear();
            session.notify(NotificationLevel::Warning, e.to_string());
        }
    }
    true
}

/// Führt die ausgegebene Anfrage gegen den Dienst aus und übernimmt die Antwort.
///
/// Gibt `false` zurück, wenn keine Anfrage ausstand oder die Antwort inzwischen veraltet war.
pub async fn resolve_pending<S: GraphQueryService>(
    session: &mut PathSession,
    service: &S,
) -> bool {
    let Some(request) = session.take_neighbor_request() else {
        return false;
    };
    let response = NeighborResolver::fetch(service, request).await;
    apply_response(session, response)
}

/// Verwirft Kandidaten und bricht laufende Suchen ab.
pub fn clear(session: &mut PathSession) {
    session.reset_neighbor_search();
    log::debug!("Nachbarkandidaten verworfen");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_fixtures::{bus_path, bus_segment};
    use crate::graph::InMemoryGraphService;
    use crate::shared::EditorOptions;

    fn session() -> PathSession {
        PathSession::with_path(bus_path(&[(10, 1, 2)]), EditorOptions::default())
    }

    fn target(session: &PathSession) -> NeighborSearchTarget {
        session.path.search_target_at(2).expect("Suchziel")
    }

    #[tokio::test]
    async fn test_zero_candidates_awaits_input() {
        let mut session = session();
        let t = target(&session);
        begin_search(&mut session, t);
        assert_eq!(session.neighbors.status, SearchStatus::Pending);

        assert!(resolve_pending(&mut session, &InMemoryGraphService::new()).await);
        assert_eq!(session.neighbors.status, SearchStatus::AwaitingInput);
        assert!(session.neighbors.candidates.is_empty());
        assert_eq!(session.path.len(), 1);
        assert_eq!(session.notifications.len(), 1);
    }

    #[tokio::test]
    async fn test_late_response_after_new_search_is_ignored() {
        let mut service = InMemoryGraphService::new();
        service.add_segment(bus_segment(11, 2, 3));
        let mut session = session();
        let t = target(&session);

        begin_search(&mut session, t);
        let first = session.take_neighbor_request().expect("Anfrage");
        begin_search(&mut session, t);

        let late = NeighborResolver::fetch(&service, first).await;
        assert!(!apply_response(&mut session, late));
        assert_eq!(session.neighbors.status, SearchStatus::Pending);

        assert!(resolve_pending(&mut session, &service).await);
        assert_eq!(session.neighbors.candidates.len(), 1);
    }

    #[test]
    fn test_closed_path_does_not_search() {
        let mut session = session();
        session.path_mut().set_terminal(true);
        let t = NeighborSearchTarget {
            node_id: 2,
            add_type: crate::core::AddType::After,
            order_context: 1,
        };
        begin_search(&mut session, t);
        assert_eq!(session.neighbors.status, SearchStatus::Idle);
        assert!(session.take_neighbor_request().is_none());
    }
}
