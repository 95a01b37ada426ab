//! Gerichtetes Netzsegment zwischen zwei Knoten inklusive Geometrie.

use super::Node;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Verkehrsmittel eines Segments bzw. Linienwegs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransitType {
    /// Bus
    #[default]
    Bus,
    /// Straßenbahn
    Tram,
    /// U-Bahn
    Subway,
    /// Zug
    Train,
    /// Fähre
    Ferry,
}

/// Richtung eines Linienwegs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PathDirection {
    /// Hinrichtung
    #[default]
    Outbound,
    /// Rückrichtung
    Inbound,
}

/// Ein gerichtetes Segment (Kante) des Netzgraphen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Eindeutige Segment-ID
    pub id: u64,
    /// Startknoten
    pub start_node: Node,
    /// Endknoten
    pub end_node: Node,
    /// Positionshinweis aus dem Quellgraphen (nicht zwingend lückenlos)
    #[serde(default)]
    pub order_number: u32,
    /// Geometrie vom Start- zum Endknoten
    #[serde(default)]
    pub geometry: Vec<DVec2>,
    /// Verkehrsmittel
    pub transit_type: TransitType,
    /// Vom Server gemessene Länge in Metern (falls vorhanden)
    #[serde(default)]
    pub measured_length: Option<f64>,
}

impl Segment {
    /// Erstellt ein Segment mit gerader Geometrie zwischen Start- und Endknoten.
    pub fn new(id: u64, start_node: Node, end_node: Node, transit_type: TransitType) -> Self {
        let geometry = vec![start_node.position, end_node.position];
        Self {
            id,
            start_node,
            end_node,
            order_number: 0,
            geometry,
            transit_type,
            measured_length: None,
        }
    }

    /// Setzt die Geometrie (Builder-Stil).
    pub fn with_geometry(mut self, geometry: Vec<DVec2>) -> Self {
        self.geometry = geometry;
        self
    }

    /// Setzt die gemessene Länge in Metern (Builder-Stil).
    pub fn with_measured_length(mut self, meters: f64) -> Self {
        self.measured_length = Some(meters);
        self
    }

    /// Setzt den Positionshinweis (Builder-Stil).
    pub fn with_order_number(mut self, order_number: u32) -> Self {
        self.order_number = order_number;
        self
    }

    /// ID des Startknotens
    pub fn start_id(&self) -> u64 {
        self.start_node.id
    }

    /// ID des Endknotens
    pub fn end_id(&self) -> u64 {
        self.end_node.id
    }

    /// Mittelpunkt und Winkel (Radiant) zwischen Start- und Endknoten.
    pub fn midpoint_and_angle(&self) -> (DVec2, f64) {
        let start = self.start_node.position;
        let end = self.end_node.position;
        let delta = end - start;
        ((start + end) * 0.5, delta.y.atan2(delta.x))
    }
}
