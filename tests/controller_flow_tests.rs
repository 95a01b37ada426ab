//! Integrationstests für den Event/Command-Fluss über den Controller:
//! - Nachbarsuche nach jeder Mutation (inkl. Szenario C)
//! - Veraltete Antworten, Fehler des Graph-Dienstes
//! - Kopieren zwischen Linienwegen, Undo/Redo, Laden aus JSON

use glam::DVec2;
use route_path_editor::app::{NeighborResolver, PathChange};
use route_path_editor::graph::{GraphQueryService, NeighborQuery, NeighborSegments};
use route_path_editor::{
    AddType, InMemoryGraphService, InteractionEvent, NeighborCandidate, Node, NodeKind,
    NotificationLevel, PathCommand, PathController, PathDirection, PathEnd, PathSession,
    PathState, RoutePath, SearchStatus, Segment, TransitType, UsagePath,
};

fn node(id: u64) -> Node {
    Node::new(id, DVec2::new(24.9 + id as f64 * 0.001, 60.17), NodeKind::Crossroad)
}

fn segment(id: u64, from: u64, to: u64) -> Segment {
    Segment::new(id, node(from), node(to), TransitType::Bus)
}

/// Netz: 1 → 2 → 3 → 4 sowie Abzweig 2 → 5 (von Linie 2002 genutzt).
fn network() -> InMemoryGraphService {
    let mut service = InMemoryGraphService::new();
    for s in [
        segment(12, 1, 2),
        segment(23, 2, 3),
        segment(34, 3, 4),
        segment(25, 2, 5),
    ] {
        service.add_segment(s);
    }
    service.add_usage(25, UsagePath::new("2002", PathDirection::Inbound));
    service
}

fn empty_session() -> PathSession {
    PathSession::new("550", PathDirection::Outbound, TransitType::Bus)
}

struct UnreachableService;

impl GraphQueryService for UnreachableService {
    async fn fetch_neighbor_segments(
        &self,
        _query: &NeighborQuery,
    ) -> anyhow::Result<NeighborSegments> {
        anyhow::bail!("Zeitüberschreitung")
    }

    async fn fetch_segments_starting_at(
        &self,
        _node_id: u64,
        _order_context: u32,
    ) -> anyhow::Result<Vec<NeighborCandidate>> {
        anyhow::bail!("Zeitüberschreitung")
    }
}

#[tokio::test]
async fn test_build_path_by_selecting_candidates() {
    let service = network();
    let mut controller = PathController::new();
    let mut session = empty_session();

    controller.handle_intent(
        &mut session,
        InteractionEvent::NodeSelected {
            node_id: 1,
            boundary: None,
        },
    );
    assert_eq!(session.neighbors.status, SearchStatus::Pending);
    assert!(controller.resolve_neighbors(&mut session, &service).await);
    let offered: Vec<u64> = session.neighbors.candidates.iter().map(|c| c.segment.id).collect();
    assert_eq!(offered, vec![12]);

    let changes =
        controller.handle_intent(&mut session, InteractionEvent::SegmentSelected { segment_id: 12 });
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].change, PathChange::Appended { segment_id: 12 });
    assert_eq!(changes[0].state, PathState::Open);

    // Die Mutation gibt direkt die Suche am neuen Ende aus
    assert_eq!(session.neighbors.status, SearchStatus::Pending);
    assert_eq!(session.neighbors.boundary_node_id, Some(2));
    assert!(controller.resolve_neighbors(&mut session, &service).await);

    let offered: Vec<(u64, usize)> = session
        .neighbors
        .candidates
        .iter()
        .map(|c| (c.segment.id, c.usage_count()))
        .collect();
    assert_eq!(offered, vec![(25, 1), (23, 0)], "genutzte Segmente zuerst");
    assert_eq!(session.neighbors.add_type, Some(AddType::After));

    controller.handle_intent(&mut session, InteractionEvent::SegmentSelected { segment_id: 23 });
    assert_eq!(session.path.segment_ids(), vec![12, 23]);

    let scene = controller.build_render_scene(&session);
    assert_eq!(scene.polylines.len(), 1);
    assert_eq!(scene.state, PathState::Open);
}

#[tokio::test]
async fn test_scenario_c_no_candidates_awaits_input() {
    let service = network();
    let mut controller = PathController::new();
    let mut session = PathSession::with_path(
        RoutePath::from_segments(
            "550",
            PathDirection::Outbound,
            TransitType::Bus,
            vec![segment(12, 1, 2), segment(23, 2, 3), segment(34, 3, 4)],
        )
        .expect("gültiger Linienweg"),
        Default::default(),
    );

    controller.handle_intent(
        &mut session,
        InteractionEvent::NodeSelected {
            node_id: 4,
            boundary: Some(PathEnd::End),
        },
    );
    assert!(controller.resolve_neighbors(&mut session, &service).await);

    assert_eq!(session.neighbors.status, SearchStatus::AwaitingInput);
    assert!(session.neighbors.candidates.is_empty());
    assert_eq!(session.path.len(), 3);
    assert!(
        session
            .notifications
            .iter()
            .all(|n| n.level == NotificationLevel::Info)
    );
}

#[tokio::test]
async fn test_graph_failure_is_recovered_locally() {
    let mut controller = PathController::new();
    let mut session = empty_session();

    controller.handle_intent(
        &mut session,
        InteractionEvent::NodeSelected {
            node_id: 1,
            boundary: None,
        },
    );
    assert!(
        controller
            .resolve_neighbors(&mut session, &UnreachableService)
            .await
    );

    assert!(session.neighbors.candidates.is_empty());
    assert!(session.path.is_empty());
    let warning = session.notifications.last().expect("Warnung erwartet");
    assert_eq!(warning.level, NotificationLevel::Warning);
    assert!(warning.message.contains("Zeitüberschreitung"));
}

#[tokio::test]
async fn test_response_for_superseded_boundary_is_discarded() {
    let service = network();
    let mut controller = PathController::new();
    let mut session = empty_session();

    controller.handle_intent(
        &mut session,
        InteractionEvent::NodeSelected {
            node_id: 1,
            boundary: None,
        },
    );
    let superseded = session.take_neighbor_request().expect("Anfrage erwartet");

    controller.handle_intent(
        &mut session,
        InteractionEvent::NodeSelected {
            node_id: 3,
            boundary: None,
        },
    );

    let late = NeighborResolver::fetch(&service, superseded).await;
    assert!(!controller.apply_neighbor_response(&mut session, late));
    assert!(session.neighbors.candidates.is_empty());

    assert!(controller.resolve_neighbors(&mut session, &service).await);
    let offered: Vec<u64> = session.neighbors.candidates.iter().map(|c| c.segment.id).collect();
    assert_eq!(offered, vec![34]);
}

#[test]
fn test_invalid_append_becomes_warning() {
    let mut controller = PathController::new();
    let mut session = empty_session();

    controller.handle_command(&mut session, PathCommand::AppendSegment { segment: segment(12, 1, 2) });
    let change =
        controller.handle_command(&mut session, PathCommand::AppendSegment { segment: segment(34, 3, 4) });

    assert!(change.is_none());
    assert_eq!(session.path.segment_ids(), vec![12]);
    let warning = session.notifications.last().expect("Warnung erwartet");
    assert_eq!(warning.level, NotificationLevel::Warning);
    assert_eq!(session.command_log.len(), 2);
}

#[test]
fn test_copy_range_between_paths_then_undo_redo() {
    let mut controller = PathController::new();
    let mut session = PathSession::with_path(
        RoutePath::from_segments(
            "550",
            PathDirection::Outbound,
            TransitType::Bus,
            vec![segment(12, 1, 2)],
        )
        .expect("gültiger Linienweg"),
        Default::default(),
    );
    session.register_source_path(
        "2002",
        RoutePath::from_segments(
            "2002",
            PathDirection::Inbound,
            TransitType::Bus,
            vec![segment(92, 9, 2), segment(23, 2, 3), segment(34, 3, 4)],
        )
        .expect("gültiger Quellweg"),
    );

    controller.handle_intent(
        &mut session,
        InteractionEvent::CopyPreviewRequested {
            range: route_path_editor::CopyRange::new("2002", 2, 4),
        },
    );
    let scene = controller.build_render_scene(&session);
    let preview = scene.copy_preview.expect("Vorschau erwartet");
    assert_eq!(preview.selected.len(), 1);
    assert_eq!(preview.discarded.len(), 1);

    let changes = controller.handle_intent(
        &mut session,
        InteractionEvent::CopyRangeSelected {
            source_path_key: "2002".to_string(),
            start_node_id: 2,
            end_node_id: 4,
        },
    );
    assert_eq!(
        changes[0].change,
        PathChange::RangeInserted {
            add_type: AddType::After,
            segment_ids: vec![23, 34],
        }
    );
    assert_eq!(session.path.segment_ids(), vec![12, 23, 34]);
    assert!(session.copy_preview.is_none());

    controller.handle_intent(&mut session, InteractionEvent::UndoRequested);
    assert_eq!(session.path.segment_ids(), vec![12]);

    controller.handle_intent(&mut session, InteractionEvent::RedoRequested);
    assert_eq!(session.path.segment_ids(), vec![12, 23, 34]);
}

#[test]
fn test_backward_copy_selection_is_inserted_in_path_order() {
    let mut controller = PathController::new();
    let mut session = PathSession::with_path(
        RoutePath::from_segments(
            "550",
            PathDirection::Outbound,
            TransitType::Bus,
            vec![segment(56, 5, 6)],
        )
        .expect("gültiger Linienweg"),
        Default::default(),
    );
    session.register_source_path(
        "2002",
        RoutePath::from_segments(
            "2002",
            PathDirection::Inbound,
            TransitType::Bus,
            vec![
                segment(12, 1, 2),
                segment(23, 2, 3),
                segment(34, 3, 4),
                segment(45, 4, 5),
            ],
        )
        .expect("gültiger Quellweg"),
    );

    let changes = controller.handle_intent(
        &mut session,
        InteractionEvent::CopyRangeSelected {
            source_path_key: "2002".to_string(),
            start_node_id: 5,
            end_node_id: 2,
        },
    );

    assert_eq!(
        changes[0].change,
        PathChange::RangeInserted {
            add_type: AddType::Before,
            segment_ids: vec![45, 34, 23],
        }
    );
    assert_eq!(session.path.segment_ids(), vec![23, 34, 45, 56]);
    assert_eq!(session.neighbors.boundary_node_id, Some(2));
    assert!(session.notifications.is_empty());
}

#[test]
fn test_terminal_toggle_closes_and_reopens() {
    let mut controller = PathController::new();
    let mut session = empty_session();
    controller.handle_command(&mut session, PathCommand::AppendSegment { segment: segment(12, 1, 2) });

    let changes = controller.handle_intent(&mut session, InteractionEvent::TerminalToggled);
    assert_eq!(changes[0].state, PathState::Closed);
    assert_eq!(session.neighbors.status, SearchStatus::Idle);

    let changes = controller.handle_intent(
        &mut session,
        InteractionEvent::BoundaryRemovalRequested { end: PathEnd::End },
    );
    assert_eq!(changes[0].state, PathState::Empty);
    assert!(!session.path.is_terminal());
}

#[test]
fn test_loaded_path_with_gap_is_rejected() {
    let json = r#"{
        "routeId": "550",
        "direction": "outbound",
        "transitType": "bus",
        "segments": [
            { "id": 1, "startNode": { "id": 1, "position": [24.90, 60.17] },
              "endNode": { "id": 2, "position": [24.91, 60.17] }, "transitType": "bus" },
            { "id": 2, "startNode": { "id": 3, "position": [24.92, 60.17] },
              "endNode": { "id": 4, "position": [24.93, 60.17] }, "transitType": "bus" }
        ]
    }"#;

    assert!(route_path_editor::parse_route_path(json).is_err());
}
