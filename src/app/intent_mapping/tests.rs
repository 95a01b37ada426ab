use crate::app::{InteractionEvent, PathCommand, PathSession};
use crate::core::test_fixtures::{bus_path, bus_segment};
use crate::core::{AddType, NeighborCandidate, PathDirection, PathEnd, TransitType};
use crate::shared::EditorOptions;

use super::map_intent_to_commands;

fn session() -> PathSession {
    PathSession::with_path(bus_path(&[(10, 1, 2), (11, 2, 3)]), EditorOptions::default())
}

#[test]
fn node_on_empty_path_searches_segments_starting_there() {
    let session = PathSession::new("1001", PathDirection::Outbound, TransitType::Bus);

    let commands = map_intent_to_commands(
        &session,
        InteractionEvent::NodeSelected {
            node_id: 7,
            boundary: None,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        PathCommand::RequestNeighbors { target } if target.node_id == 7 && target.add_type == AddType::After
    ));
}

#[test]
fn start_boundary_maps_to_search_before() {
    let commands = map_intent_to_commands(
        &session(),
        InteractionEvent::NodeSelected {
            node_id: 1,
            boundary: Some(PathEnd::Start),
        },
    );

    assert!(matches!(
        commands[0],
        PathCommand::RequestNeighbors { target }
            if target.add_type == AddType::Before && target.order_context == 0
    ));
}

#[test]
fn interior_node_clears_neighbors() {
    let commands = map_intent_to_commands(
        &session(),
        InteractionEvent::NodeSelected {
            node_id: 2,
            boundary: None,
        },
    );

    assert_eq!(commands, vec![PathCommand::ClearNeighbors]);
}

#[test]
fn selected_candidate_maps_to_matching_end() {
    let mut session = session();
    session.neighbors.add_type = Some(AddType::Before);
    session
        .neighbors
        .candidates
        .push(NeighborCandidate::unused(bus_segment(9, 0, 1)));

    let commands =
        map_intent_to_commands(&session, InteractionEvent::SegmentSelected { segment_id: 9 });
    assert!(matches!(
        &commands[0],
        PathCommand::PrependSegment { segment } if segment.id == 9
    ));

    let unknown =
        map_intent_to_commands(&session, InteractionEvent::SegmentSelected { segment_id: 99 });
    assert!(unknown.is_empty());
}

#[test]
fn terminal_toggle_inverts_current_marker() {
    let commands = map_intent_to_commands(&session(), InteractionEvent::TerminalToggled);
    assert_eq!(commands, vec![PathCommand::SetTerminal { terminal: true }]);
}
