//! Graph-Dienst auf Basis eines im Speicher gehaltenen Netz-Schnappschusses.

use super::service::{GraphQueryService, NeighborQuery, NeighborSegments};
use crate::core::{AddType, NeighborCandidate, Segment, UsagePath};
use anyhow::Context;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Nutzung eines Segments durch einen Linienweg
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentUsage {
    /// Genutztes Segment
    pub segment_id: u64,
    /// Nutzender Linienweg
    pub path: UsagePath,
}

/// Serialisierbarer Netz-Schnappschuss (Segmente + Nutzungen)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSnapshot {
    /// Alle Segmente des Netzes
    pub segments: Vec<Segment>,
    /// Nutzungen durch aktive Linienwege
    #[serde(default)]
    pub usages: Vec<SegmentUsage>,
}

/// In-Memory-Implementierung des Graph-Dienstes
#[derive(Debug, Clone, Default)]
pub struct InMemoryGraphService {
    /// Segmente nach ID
    segments: IndexMap<u64, Segment>,
    /// Nutzende Linienwege je Segment
    usage: IndexMap<u64, Vec<UsagePath>>,
}

impl InMemoryGraphService {
    /// Erstellt einen leeren Dienst
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut den Dienst aus einem Schnappschuss
    pub fn from_snapshot(snapshot: GraphSnapshot) -> Self {
        let mut service = Self::new();
        for segment in snapshot.segments {
            service.add_segment(segment);
        }
        for usage in snapshot.usages {
            service.add_usage(usage.segment_id, usage.path);
        }
        service
    }

    /// Parst einen Schnappschuss aus JSON
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let snapshot: GraphSnapshot =
            serde_json::from_str(json).context("Netz-Schnappschuss ist kein gültiges JSON")?;
        log::info!(
            "Netz-Schnappschuss geladen: {} Segmente, {} Nutzungen",
            snapshot.segments.len(),
            snapshot.usages.len()
        );
        Ok(Self::from_snapshot(snapshot))
    }

    /// Fügt ein Segment hinzu (ersetzt gleiche ID)
    pub fn add_segment(&mut self, segment: Segment) {
        self.segments.insert(segment.id, segment);
    }

    /// Vermerkt die Nutzung eines Segments durch einen Linienweg
    pub fn add_usage(&mut self, segment_id: u64, path: UsagePath) {
        let paths = self.usage.entry(segment_id).or_default();
        if !paths.contains(&path) {
            paths.push(path);
        }
    }

    /// Anzahl der Segmente
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Kandidat mit Nutzungen und Positionshinweis der Anfrage
    fn candidate(&self, segment: &Segment, order_context: u32) -> NeighborCandidate {
        let segment = segment.clone().with_order_number(order_context);
        let usage_paths = self.usage.get(&segment.id).cloned().unwrap_or_default();
        NeighborCandidate {
            segment,
            usage_paths,
        }
    }
}

impl GraphQueryService for InMemoryGraphService {
    async fn fetch_neighbor_segments(
        &self,
        query: &NeighborQuery,
    ) -> anyhow::Result<NeighborSegments> {
        let candidates = self
            .segments
            .values()
            .filter(|s| s.transit_type == query.transit_type)
            .filter(|s| !query.existing_segment_ids.contains(&s.id))
            .filter(|s| match query.add_type {
                AddType::After => s.start_id() == query.node_id,
                AddType::Before => s.end_id() == query.node_id,
            })
            .map(|s| self.candidate(s, query.order_context))
            .collect();

        Ok(NeighborSegments {
            candidates,
            add_type: query.add_type,
        })
    }

    async fn fetch_segments_starting_at(
        &self,
        node_id: u64,
        order_context: u32,
    ) -> anyhow::Result<Vec<NeighborCandidate>> {
        Ok(self
            .segments
            .values()
            .filter(|s| s.start_id() == node_id)
            .map(|s| self.candidate(s, order_context))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_fixtures::bus_segment;
    use crate::core::{PathDirection, TransitType};

    fn service() -> InMemoryGraphService {
        let mut service = InMemoryGraphService::new();
        service.add_segment(bus_segment(10, 1, 2));
        service.add_segment(bus_segment(11, 2, 3));
        service.add_segment(bus_segment(12, 2, 4));
        service.add_segment(bus_segment(13, 5, 2));
        let mut tram = bus_segment(14, 2, 6);
        tram.transit_type = TransitType::Tram;
        service.add_segment(tram);
        service.add_usage(11, UsagePath::new("2002", PathDirection::Inbound));
        service.add_usage(11, UsagePath::new("2002", PathDirection::Inbound));
        service
    }

    #[tokio::test]
    async fn test_neighbors_after_node_filter_mode_and_existing() {
        let query = NeighborQuery {
            node_id: 2,
            order_context: 1,
            transit_type: TransitType::Bus,
            existing_segment_ids: vec![10, 12],
            add_type: AddType::After,
        };
        let result = service()
            .fetch_neighbor_segments(&query)
            .await
            .expect("Antwort erwartet");

        assert_eq!(result.add_type, AddType::After);
        let ids: Vec<u64> = result.candidates.iter().map(|c| c.segment.id).collect();
        assert_eq!(ids, vec![11]);
        assert_eq!(result.candidates[0].usage_count(), 1, "Nutzung nur einmal zählen");
        assert_eq!(result.candidates[0].segment.order_number, 1);
    }

    #[tokio::test]
    async fn test_neighbors_before_node() {
        let query = NeighborQuery {
            node_id: 2,
            order_context: 0,
            transit_type: TransitType::Bus,
            existing_segment_ids: vec![11],
            add_type: AddType::Before,
        };
        let result = service()
            .fetch_neighbor_segments(&query)
            .await
            .expect("Antwort erwartet");
        let ids: Vec<u64> = result.candidates.iter().map(|c| c.segment.id).collect();
        assert_eq!(ids, vec![10, 13]);
    }

    #[tokio::test]
    async fn test_segments_starting_at_node() {
        let candidates = service()
            .fetch_segments_starting_at(2, 0)
            .await
            .expect("Antwort erwartet");
        let ids: Vec<u64> = candidates.iter().map(|c| c.segment.id).collect();
        assert_eq!(ids, vec![11, 12, 14]);
    }

    #[test]
    fn test_from_json_snapshot() {
        let json = r#"{
            "segments": [{
                "id": 7,
                "startNode": { "id": 1, "position": [24.94, 60.17], "kind": "stop" },
                "endNode": { "id": 2, "position": [24.95, 60.17] },
                "geometry": [[24.94, 60.17], [24.95, 60.17]],
                "transitType": "bus",
                "measuredLength": 556.0
            }],
            "usages": [{ "segmentId": 7, "path": { "routeId": "550", "direction": "outbound" } }]
        }"#;
        let service = InMemoryGraphService::from_json(json).expect("Parse erwartet");
        assert_eq!(service.segment_count(), 1);
        assert!(InMemoryGraphService::from_json("{").is_err());
    }
}
