//! Testhilfen: Knoten, Segmente und Linienwege mit deterministischer Geometrie.

use super::{Node, NodeKind, PathDirection, RoutePath, Segment, TransitType};
use glam::DVec2;

/// Knoten auf einer Ost-West-Linie bei 60.17° N, 0.001° Abstand pro ID.
pub(crate) fn node(id: u64) -> Node {
    Node::new(
        id,
        DVec2::new(24.9 + id as f64 * 0.001, 60.17),
        NodeKind::Crossroad,
    )
}

/// Bus-Segment mit gerader Geometrie
pub(crate) fn bus_segment(id: u64, from: u64, to: u64) -> Segment {
    Segment::new(id, node(from), node(to), TransitType::Bus)
}

/// Bus-Linienweg aus (segment_id, from, to)-Tripeln
pub(crate) fn bus_path(chain: &[(u64, u64, u64)]) -> RoutePath {
    let segments = chain
        .iter()
        .map(|&(id, from, to)| bus_segment(id, from, to))
        .collect();
    RoutePath::from_segments("1001", PathDirection::Outbound, TransitType::Bus, segments)
        .expect("gültiger Testweg erwartet")
}
