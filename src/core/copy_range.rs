//! Kopieren von Teilstrecken zwischen zwei Knoten eines Quell-Linienwegs.
//!
//! Mehrfach durchfahrene Knoten (Rundkurse): Start ist das erste Auftreten des
//! Startknotens in der Knotenfolge, Ende das erste Auftreten des Endknotens danach.
//! Gibt es danach keines, gilt das erste Auftreten insgesamt (Kopie rückwärts).

use super::error::PathError;
use super::{RoutePath, Segment};

/// Auswahl einer Teilstrecke eines Quell-Linienwegs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRange {
    /// Schlüssel des Quell-Linienwegs in der Session
    pub source_path_key: String,
    /// Zuerst gewählter Knoten
    pub start_node_id: u64,
    /// Zuletzt gewählter Knoten
    pub end_node_id: u64,
}

/// Indexbereich einer Teilstrecke in der Segmentliste
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RunBounds {
    from: usize,
    to: usize,
    reversed: bool,
}

/// Ermittelt `segments[from..to]` zwischen zwei Knoten der Knotenfolge.
///
/// `None` wenn ein Knoten fehlt, leerer Bereich wenn beide Knoten gleich sind.
fn run_bounds(path: &RoutePath, start_node_id: u64, end_node_id: u64) -> Option<RunBounds> {
    let nodes = path.node_sequence();
    let start_pos = nodes.iter().position(|&n| n == start_node_id)?;
    let first_end = nodes.iter().position(|&n| n == end_node_id)?;

    if start_node_id == end_node_id {
        return Some(RunBounds {
            from: 0,
            to: 0,
            reversed: false,
        });
    }

    let end_pos = nodes[start_pos + 1..]
        .iter()
        .position(|&n| n == end_node_id)
        .map(|i| i + start_pos + 1)
        .unwrap_or(first_end);

    Some(if start_pos < end_pos {
        RunBounds {
            from: start_pos,
            to: end_pos,
            reversed: false,
        }
    } else {
        RunBounds {
            from: end_pos,
            to: start_pos,
            reversed: true,
        }
    })
}

/// Segmente zwischen den beiden Knoten, in Auswahlreihenfolge.
///
/// Liegt der Startknoten hinter dem Endknoten, wird die Teilstrecke in
/// umgekehrter Wegreihenfolge geliefert. Fehlender Knoten oder gleicher Knoten → leer.
pub fn segments_to_copy(path: &RoutePath, start_node_id: u64, end_node_id: u64) -> Vec<&Segment> {
    let Some(bounds) = run_bounds(path, start_node_id, end_node_id) else {
        return Vec::new();
    };
    let run = &path.segments()[bounds.from..bounds.to];
    if bounds.reversed {
        run.iter().rev().collect()
    } else {
        run.iter().collect()
    }
}

/// Komplement zu [`segments_to_copy`] in Wegreihenfolge.
pub fn segments_not_to_copy(
    path: &RoutePath,
    start_node_id: u64,
    end_node_id: u64,
) -> Vec<&Segment> {
    let segments = path.segments();
    match run_bounds(path, start_node_id, end_node_id) {
        Some(bounds) => segments[..bounds.from]
            .iter()
            .chain(&segments[bounds.to..])
            .collect(),
        None => segments.iter().collect(),
    }
}

/// Zerlegung eines Quell-Linienwegs in kopierte und verworfene Segmente
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CopyPreview {
    /// Zu kopierende Segmente (Auswahlreihenfolge)
    pub to_copy: Vec<Segment>,
    /// Verworfene Segmente (Wegreihenfolge)
    pub not_to_copy: Vec<Segment>,
}

impl CopyRange {
    /// Erstellt eine neue Auswahl
    pub fn new(source_path_key: impl Into<String>, start_node_id: u64, end_node_id: u64) -> Self {
        Self {
            source_path_key: source_path_key.into(),
            start_node_id,
            end_node_id,
        }
    }

    /// Löst die Auswahl gegen den Quell-Linienweg auf.
    ///
    /// Fehlt ein Knoten, entsteht `CopyRangeNotFound`; gleiche Knoten ergeben eine leere Folge.
    pub fn resolve(&self, source: &RoutePath) -> Result<Vec<Segment>, PathError> {
        if run_bounds(source, self.start_node_id, self.end_node_id).is_none() {
            return Err(self.not_found());
        }
        Ok(segments_to_copy(source, self.start_node_id, self.end_node_id)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Vorschau für die Darstellung: kopierte und verworfene Segmente.
    pub fn preview(&self, source: &RoutePath) -> CopyPreview {
        CopyPreview {
            to_copy: segments_to_copy(source, self.start_node_id, self.end_node_id)
                .into_iter()
                .cloned()
                .collect(),
            not_to_copy: segments_not_to_copy(source, self.start_node_id, self.end_node_id)
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    /// Fehler für eine nicht auflösbare Auswahl
    pub fn not_found(&self) -> PathError {
        PathError::CopyRangeNotFound {
            source_path: self.source_path_key.clone(),
            start_node_id: self.start_node_id,
            end_node_id: self.end_node_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_fixtures::bus_path;
    use std::collections::HashSet;

    fn ids(segments: &[&Segment]) -> Vec<u64> {
        segments.iter().map(|s| s.id).collect()
    }

    fn assert_partition(path: &RoutePath, a: u64, b: u64) {
        let copy = ids(&segments_to_copy(path, a, b));
        let rest = ids(&segments_not_to_copy(path, a, b));
        let copy_set: HashSet<u64> = copy.iter().copied().collect();
        let rest_set: HashSet<u64> = rest.iter().copied().collect();
        assert!(copy_set.is_disjoint(&rest_set), "Überschneidung bei {a}->{b}");
        assert_eq!(copy.len() + rest.len(), path.len(), "Segment verloren bei {a}->{b}");
        let all: HashSet<u64> = copy_set.union(&rest_set).copied().collect();
        assert_eq!(all, path.segment_ids().into_iter().collect::<HashSet<_>>());
    }

    #[test]
    fn test_forward_selection_copies_run_in_path_order() {
        let path = bus_path(&[(10, 1, 2), (11, 2, 3), (12, 3, 4), (13, 4, 5)]);
        assert_eq!(ids(&segments_to_copy(&path, 2, 4)), vec![11, 12]);
        assert_eq!(ids(&segments_not_to_copy(&path, 2, 4)), vec![10, 13]);
    }

    #[test]
    fn test_backward_selection_copies_in_reverse_order() {
        let path = bus_path(&[(10, 1, 2), (11, 2, 3), (12, 3, 4), (13, 4, 5)]);
        assert_eq!(ids(&segments_to_copy(&path, 5, 2)), vec![13, 12, 11]);
        assert_eq!(ids(&segments_not_to_copy(&path, 5, 2)), vec![10]);
    }

    #[test]
    fn test_same_node_twice_yields_empty() {
        let path = bus_path(&[(10, 1, 2), (11, 2, 3)]);
        assert!(segments_to_copy(&path, 2, 2).is_empty());
        assert_eq!(ids(&segments_not_to_copy(&path, 2, 2)), vec![10, 11]);
        let range = CopyRange::new("p", 2, 2);
        assert_eq!(range.resolve(&path), Ok(Vec::new()));
    }

    #[test]
    fn test_absent_node_yields_empty_and_not_found() {
        let path = bus_path(&[(10, 1, 2), (11, 2, 3)]);
        assert!(segments_to_copy(&path, 1, 99).is_empty());
        assert_eq!(segments_not_to_copy(&path, 1, 99).len(), 2);

        let range = CopyRange::new("p", 99, 1);
        assert_eq!(
            range.resolve(&path),
            Err(PathError::CopyRangeNotFound {
                source_path: "p".to_string(),
                start_node_id: 99,
                end_node_id: 1,
            })
        );
    }

    #[test]
    fn test_loop_path_prefers_occurrence_after_start() {
        // 1 → 2 → 3 → 1 → 4
        let path = bus_path(&[(10, 1, 2), (11, 2, 3), (12, 3, 1), (13, 1, 4)]);
        assert_eq!(ids(&segments_to_copy(&path, 2, 1)), vec![11, 12]);
        assert_eq!(ids(&segments_to_copy(&path, 1, 3)), vec![10, 11]);
        assert_eq!(ids(&segments_to_copy(&path, 3, 4)), vec![12, 13]);
        // Kein Auftreten von 2 hinter 4 → rückwärts
        assert_eq!(ids(&segments_to_copy(&path, 4, 2)), vec![13, 12, 11]);
    }

    #[test]
    fn test_partition_law_for_all_node_pairs() {
        let path = bus_path(&[(10, 1, 2), (11, 2, 3), (12, 3, 2), (13, 2, 4), (14, 4, 5)]);
        let nodes = path.node_sequence();
        for &a in &nodes {
            for &b in &nodes {
                assert_partition(&path, a, b);
            }
        }
    }

    #[test]
    fn test_preview_matches_free_functions() {
        let path = bus_path(&[(10, 1, 2), (11, 2, 3), (12, 3, 4)]);
        let preview = CopyRange::new("p", 3, 1).preview(&path);
        assert_eq!(
            preview.to_copy.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![11, 10]
        );
        assert_eq!(
            preview.not_to_copy.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![12]
        );
    }
}
