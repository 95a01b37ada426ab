//! JSON Import/Export für gespeicherte Linienwege.
//!
//! Ein Dokument enthält die Metadaten des Linienwegs und seine Segmente in
//! Fahrtreihenfolge. Beim Laden werden alle Strukturinvarianten geprüft.

pub mod parser;
pub mod writer;

pub use parser::{load_route_path, parse_route_path};
pub use writer::{save_route_path, write_route_path};

use crate::core::{PathDirection, Segment, TransitType};
use serde::{Deserialize, Serialize};

/// Gespeicherte Form eines Linienwegs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RoutePathDocument {
    pub route_id: String,
    pub direction: PathDirection,
    pub transit_type: TransitType,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub color: Option<[f32; 4]>,
    #[serde(default)]
    pub terminal: bool,
    pub segments: Vec<Segment>,
}

fn default_visible() -> bool {
    true
}
