//! Längenberechnung für Linienwege: aus Geometrie oder aus gemessenen Segmentlängen.
//!
//! Die Berechnung wirft nie Fehler. Fehlende Geometrie ergibt Länge 0 und
//! gilt als nicht gemessen.

use super::Segment;
use glam::DVec2;

/// Mittlerer Erdradius in Metern (IUGG).
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Großkreisdistanz zwischen zwei WGS84-Positionen (x = Länge, y = Breite) in Metern.
pub fn haversine_distance(a: DVec2, b: DVec2) -> f64 {
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();
    let d_lat = lat_b - lat_a;
    let d_lon = (b.x - a.x).to_radians();

    let h = (d_lat * 0.5).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon * 0.5).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

/// Summe der paarweisen Distanzen einer Koordinatenfolge; 0 für weniger als zwei Punkte.
pub fn length_from_positions(positions: &[DVec2]) -> f64 {
    positions
        .windows(2)
        .map(|w| haversine_distance(w[0], w[1]))
        .sum()
}

/// Summe der Geometrielängen aller Segmente in Wegreihenfolge.
pub fn length_from_segments(segments: &[Segment]) -> f64 {
    segments
        .iter()
        .map(|s| length_from_positions(&s.geometry))
        .sum()
}

/// `true` nur wenn jedes Segment eine gemessene Länge liefert (und mindestens eines existiert).
pub fn is_length_formed_by_measured_lengths(segments: &[Segment]) -> bool {
    !segments.is_empty() && segments.iter().all(|s| s.measured_length.is_some())
}

/// Länge eines Linienwegs samt Herkunft
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PathLength {
    /// Gesamtlänge in Metern
    pub meters: f64,
    /// Ob ausschließlich gemessene Längen eingeflossen sind
    pub measured: bool,
}

impl PathLength {
    /// Gemessene Länge je Segment, sonst Geometrielänge.
    ///
    /// Ein einziges geschätztes Segment stuft die Gesamtlänge auf "abgeleitet" herab.
    pub fn of(segments: &[Segment]) -> Self {
        let meters = segments
            .iter()
            .map(|s| {
                s.measured_length
                    .unwrap_or_else(|| length_from_positions(&s.geometry))
            })
            .sum();
        Self {
            meters,
            measured: is_length_formed_by_measured_lengths(segments),
        }
    }
}
