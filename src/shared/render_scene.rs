//! Render-Szene als expliziter Übergabevertrag zwischen Session und Kartenansicht.
//!
//! Lebt im shared-Modul, da `app` sie baut und die (externe) Darstellung sie konsumiert.

use super::options::EditorOptions;
use crate::core::{AddType, DirectionArrow, PathLength, PathState, RoutePath};
use glam::DVec2;
use std::sync::Arc;

/// Offener Randknoten zur Hervorhebung
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryMarker {
    /// Knoten-ID
    pub node_id: u64,
    /// Position (WGS84)
    pub position: DVec2,
    /// Erweiterungsrichtung an diesem Knoten
    pub add_type: AddType,
}

/// Darstellbarer Nachbar-Kandidat
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateView {
    /// Segment-ID (für `SegmentSelected`)
    pub segment_id: u64,
    /// Geometrie des Segments
    pub geometry: Vec<DVec2>,
    /// Anzahl anderer Linienwege auf dem Segment
    pub usage_count: usize,
    /// Farbe je nach Nutzung
    pub color: [f32; 4],
    /// Position des Nutzungs-Badges (Segmentmitte), `None` wenn ausgeblendet
    pub badge_position: Option<DVec2>,
    /// Ausrichtung des Badges in Radiant
    pub badge_angle: f64,
}

/// Kopier-Vorschau als Polylines
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CopyPreviewView {
    /// Zu kopierende Teilstrecke
    pub selected: Vec<Vec<DVec2>>,
    /// Verworfene Teilstrecke
    pub discarded: Vec<Vec<DVec2>>,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Der aktuelle Linienweg (Arc für O(1)-Clone pro Frame)
    pub path: Arc<RoutePath>,
    /// Zusammenhängende Polylines des Linienwegs
    pub polylines: Vec<Vec<DVec2>>,
    /// Richtungspfeile entlang der Polylines
    pub arrows: Vec<DirectionArrow>,
    /// Offene Randknoten
    pub boundary_nodes: Vec<BoundaryMarker>,
    /// Aktive Nachbar-Kandidaten
    pub candidates: Vec<CandidateView>,
    /// Konstruktionszustand
    pub state: PathState,
    /// Länge samt Herkunft (gemessen oder aus Geometrie)
    pub length: PathLength,
    /// Aktive Kopier-Vorschau
    pub copy_preview: Option<CopyPreviewView>,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

