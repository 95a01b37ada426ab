//! Zusammenführen von Segmentgeometrien zu durchgehenden Polylines
//! und Platzierung von Richtungspfeilen entlang dieser Polylines.

use super::Segment;
use super::length::haversine_distance;
use glam::DVec2;

/// Führt aufeinanderfolgende Geometrien mit gemeinsamem Endpunkt zu einer Polyline zusammen.
///
/// Ein Bruch entsteht nur, wo der Endpunkt der vorigen Geometrie nicht dem
/// Startpunkt der nächsten entspricht. Leere Geometrien werden übersprungen.
/// Idempotent: `stitch(&stitch(g)) == stitch(g)`.
pub fn stitch<G: AsRef<[DVec2]>>(geometries: &[G]) -> Vec<Vec<DVec2>> {
    let mut polylines: Vec<Vec<DVec2>> = Vec::new();

    for geometry in geometries {
        let geometry = geometry.as_ref();
        let Some(first) = geometry.first() else {
            continue;
        };
        match polylines.last_mut() {
            // Gemeinsamen Punkt nur einmal übernehmen
            Some(current) if current.last() == Some(first) => {
                current.extend_from_slice(&geometry[1..]);
            }
            _ => polylines.push(geometry.to_vec()),
        }
    }

    polylines
}

/// Stitcht die Geometrien einer Segmentfolge in der gegebenen Reihenfolge.
pub fn stitch_segments<'a, I>(segments: I) -> Vec<Vec<DVec2>>
where
    I: IntoIterator<Item = &'a Segment>,
{
    let geometries: Vec<&[DVec2]> = segments
        .into_iter()
        .map(|s| s.geometry.as_slice())
        .collect();
    stitch(&geometries)
}

/// Ein Richtungspfeil auf einer Polyline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionArrow {
    /// Position (WGS84)
    pub position: DVec2,
    /// Fahrtrichtung in Radiant (atan2 auf Länge/Breite)
    pub angle: f64,
}

/// Platziert Pfeile im Abstand `interval_m` entlang einer durchgehenden Polyline.
///
/// Der erste Pfeil sitzt bei `interval_m / 2`, damit auch kurze Polylines einen Pfeil tragen.
pub fn direction_arrows(polyline: &[DVec2], interval_m: f64) -> Vec<DirectionArrow> {
    if interval_m <= 0.0 || polyline.len() < 2 {
        return Vec::new();
    }

    let mut arrows = Vec::new();
    let mut travelled = 0.0;
    let mut next_at = interval_m * 0.5;

    for piece in polyline.windows(2) {
        let (a, b) = (piece[0], piece[1]);
        let piece_len = haversine_distance(a, b);
        if piece_len <= f64::EPSILON {
            continue;
        }
        let delta = b - a;
        let angle = delta.y.atan2(delta.x);

        while next_at <= travelled + piece_len {
            let t = (next_at - travelled) / piece_len;
            arrows.push(DirectionArrow {
                position: a.lerp(b, t),
                angle,
            });
            next_at += interval_m;
        }
        travelled += piece_len;
    }

    arrows
}

/// Pfeile für alle Polylines; der Abstand beginnt an jedem Bruch neu.
pub fn direction_arrows_for_all(polylines: &[Vec<DVec2>], interval_m: f64) -> Vec<DirectionArrow> {
    polylines
        .iter()
        .flat_map(|p| direction_arrows(p, interval_m))
        .collect()
}
