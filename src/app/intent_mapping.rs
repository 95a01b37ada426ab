//! Mapping von Interaktions-Events auf mutierende Path-Commands.

use super::{InteractionEvent, PathCommand, PathSession};
use crate::core::{AddType, CopyRange, NeighborSearchTarget, PathState};

/// Übersetzt ein `InteractionEvent` in eine Sequenz ausführbarer `PathCommand`s.
pub fn map_intent_to_commands(session: &PathSession, event: InteractionEvent) -> Vec<PathCommand> {
    match event {
        InteractionEvent::NodeSelected { node_id, boundary } => {
            let path = &session.path;
            if path.is_empty() {
                return vec![PathCommand::RequestNeighbors {
                    target: NeighborSearchTarget {
                        node_id,
                        add_type: AddType::After,
                        order_context: 0,
                    },
                }];
            }

            // Markiertes Wegende hat Vorrang, sonst entscheidet der Grad am Knoten
            let hinted = boundary
                .filter(|_| path.state() == PathState::Open)
                .filter(|end| path.end_node_id(*end) == Some(node_id))
                .map(|end| NeighborSearchTarget {
                    node_id,
                    add_type: end.add_type(),
                    order_context: path.order_context(end.add_type()),
                });

            match hinted.or_else(|| path.search_target_at(node_id)) {
                Some(target) => vec![PathCommand::RequestNeighbors { target }],
                None => vec![PathCommand::ClearNeighbors],
            }
        }
        InteractionEvent::SegmentSelected { segment_id } => {
            let neighbors = &session.neighbors;
            let (Some(candidate), Some(add_type)) =
                (neighbors.candidate(segment_id), neighbors.add_type)
            else {
                log::debug!("Segment {} ist kein angebotener Kandidat", segment_id);
                return Vec::new();
            };
            let segment = candidate.segment.clone();
            match add_type {
                AddType::After => vec![PathCommand::AppendSegment { segment }],
                AddType::Before => vec![PathCommand::PrependSegment { segment }],
            }
        }
        InteractionEvent::CopyRangeSelected {
            source_path_key,
            start_node_id,
            end_node_id,
        } => vec![PathCommand::InsertCopiedRange {
            range: CopyRange::new(source_path_key, start_node_id, end_node_id),
        }],
        InteractionEvent::BoundaryRemovalRequested { end } => {
            vec![PathCommand::RemoveBoundary { end }]
        }
        InteractionEvent::TerminalToggled => vec![PathCommand::SetTerminal {
            terminal: !session.path.is_terminal(),
        }],
        InteractionEvent::CopyPreviewRequested { range } => {
            vec![PathCommand::PreviewCopyRange { range }]
        }
        InteractionEvent::CopyPreviewCleared => vec![PathCommand::ClearCopyPreview],
        InteractionEvent::UndoRequested => vec![PathCommand::Undo],
        InteractionEvent::RedoRequested => vec![PathCommand::Redo],
    }
}

#[cfg(test)]
mod tests;
