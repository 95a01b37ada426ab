//! Builder für Render-Szenen aus der Session.

use crate::app::PathSession;
use crate::core::{direction_arrows_for_all, stitch_segments, PathLength};
use crate::shared::render_scene::{BoundaryMarker, CandidateView, CopyPreviewView};
use crate::shared::RenderScene;
use std::sync::Arc;

/// Baut eine RenderScene aus der aktuellen Session.
pub fn build(session: &PathSession) -> RenderScene {
    let path = &session.path;
    let options = &session.options;

    let polylines = stitch_segments(path.segments());
    let arrows = direction_arrows_for_all(&polylines, options.arrow_interval_m);

    let nodes = path.nodes();
    let boundary_nodes = path
        .open_boundaries()
        .into_iter()
        .filter_map(|(node_id, add_type)| {
            nodes.iter().find(|n| n.id == node_id).map(|n| BoundaryMarker {
                node_id,
                position: n.position,
                add_type,
            })
        })
        .collect();

    let candidates = session
        .neighbors
        .candidates
        .iter()
        .map(|candidate| {
            let (midpoint, angle) = candidate.segment.midpoint_and_angle();
            CandidateView {
                segment_id: candidate.segment.id,
                geometry: candidate.segment.geometry.clone(),
                usage_count: candidate.usage_count(),
                color: options.candidate_color(candidate.is_used()),
                badge_position: options.show_usage_badges.then_some(midpoint),
                badge_angle: angle,
            }
        })
        .collect();

    let copy_preview = session.copy_preview.as_ref().map(|state| CopyPreviewView {
        selected: stitch_segments(&state.preview.to_copy),
        discarded: stitch_segments(&state.preview.not_to_copy),
    });

    RenderScene {
        path: Arc::clone(path),
        polylines,
        arrows,
        boundary_nodes,
        candidates,
        state: path.state(),
        length: PathLength::of(path.segments()),
        copy_preview,
        options: options.clone(),
    }
}
