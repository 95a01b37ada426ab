//! Core-Domänentypen: Knoten, Segmente, Linienweg und die reinen Algorithmen darauf.

pub mod candidate;
pub mod copy_range;
pub mod error;
pub mod geometry;
pub mod length;
pub mod node;
/// Linienweg-Modell
///
/// Dieses Modul definiert die zentrale Datenstruktur:
/// - RoutePath: geordnete Segmentliste mit Invarianten
/// - Grad-Prüfung der Knoten (offene Randknoten)
/// - Zustandsmaschine Empty/Open/Closed
pub mod route_path;
pub mod segment;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use candidate::{NeighborCandidate, UsagePath};
pub use copy_range::{CopyPreview, CopyRange, segments_not_to_copy, segments_to_copy};
pub use error::{InvalidSegmentReason, PathError};
pub use geometry::{DirectionArrow, direction_arrows, direction_arrows_for_all, stitch, stitch_segments};
pub use length::{
    PathLength, is_length_formed_by_measured_lengths, length_from_positions, length_from_segments,
};
pub use node::{Node, NodeKind};
pub use route_path::{
    AddType, NeighborSearchTarget, PathEnd, PathInvariantViolation, PathState, RoutePath,
};
pub use segment::{PathDirection, Segment, TransitType};
