//! Repräsentiert einen Knoten im Liniennetz (Haltestelle, Kreuzung, …).

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Art eines Netzknotens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    /// Haltestelle
    Stop,
    /// Kreuzung
    #[default]
    Crossroad,
    /// Gemeindegrenze
    MunicipalityBorder,
    /// Deaktivierter Knoten
    Disabled,
    /// Zeitausgleichs-Punkt (Taktknoten)
    TimeAlignment,
}

/// Ein Knoten im Liniennetz
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Eindeutige Knoten-ID
    pub id: u64,
    /// WGS84-Position (x = Längengrad, y = Breitengrad)
    pub position: DVec2,
    /// Art des Knotens
    #[serde(default)]
    pub kind: NodeKind,
}

impl Node {
    /// Erstellt einen neuen Knoten
    pub fn new(id: u64, position: DVec2, kind: NodeKind) -> Self {
        Self { id, position, kind }
    }
}
