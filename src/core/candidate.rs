//! Nachbar-Kandidaten: Segmente, die einen Linienweg an einem Randknoten verlängern dürfen.

use super::{PathDirection, Segment};
use serde::{Deserialize, Serialize};

/// Verweis auf einen anderen aktiven Linienweg
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsagePath {
    /// ID der Linie
    pub route_id: String,
    /// Richtung des Linienwegs
    pub direction: PathDirection,
}

impl UsagePath {
    /// Erstellt einen neuen Verweis
    pub fn new(route_id: impl Into<String>, direction: PathDirection) -> Self {
        Self {
            route_id: route_id.into(),
            direction,
        }
    }
}

/// Ein Segment, das als Erweiterung angeboten wird, samt Nutzung durch andere Linienwege
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborCandidate {
    /// Das angebotene Segment
    pub segment: Segment,
    /// Andere aktive Linienwege, die dieses Segment befahren
    #[serde(default)]
    pub usage_paths: Vec<UsagePath>,
}

impl NeighborCandidate {
    /// Kandidat ohne bekannte Nutzung
    pub fn unused(segment: Segment) -> Self {
        Self {
            segment,
            usage_paths: Vec::new(),
        }
    }

    /// Anzahl anderer Linienwege auf diesem Segment (Badge)
    pub fn usage_count(&self) -> usize {
        self.usage_paths.len()
    }

    /// Ob das Segment bereits von anderen Linienwegen genutzt wird
    pub fn is_used(&self) -> bool {
        !self.usage_paths.is_empty()
    }
}
