//! Schnittstelle zum externen Graph-Dienst (Nachbarsegmente, Startsegmente).

use crate::core::{AddType, NeighborCandidate, TransitType};
use std::future::Future;

/// Anfrage nach Nachbarsegmenten an einem Randknoten
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborQuery {
    /// Randknoten
    pub node_id: u64,
    /// Positionshinweis des neuen Segments
    pub order_context: u32,
    /// Verkehrsmittel des Linienwegs
    pub transit_type: TransitType,
    /// IDs der bereits enthaltenen Segmente
    pub existing_segment_ids: Vec<u64>,
    /// Erweiterungsrichtung
    pub add_type: AddType,
}

/// Antwort des Graph-Dienstes
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborSegments {
    /// Angebotene Segmente samt Nutzung
    pub candidates: Vec<NeighborCandidate>,
    /// Erweiterungsrichtung, für die die Segmente gelten
    pub add_type: AddType,
}

/// Externer Graph-Dienst.
///
/// Die Futures müssen `Send` sein, damit sie auf einem Hintergrund-Runtime laufen können.
pub trait GraphQueryService {
    /// Nachbarsegmente am Randknoten (vor oder nach dem Knoten, je nach `add_type`).
    fn fetch_neighbor_segments(
        &self,
        query: &NeighborQuery,
    ) -> impl Future<Output = anyhow::Result<NeighborSegments>> + Send;

    /// Alle Segmente, die am Knoten beginnen (Start eines leeren Linienwegs).
    fn fetch_segments_starting_at(
        &self,
        node_id: u64,
        order_context: u32,
    ) -> impl Future<Output = anyhow::Result<Vec<NeighborCandidate>>> + Send;
}
