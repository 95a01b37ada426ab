//! Der Linienweg: geordnete Segmentliste mit Strukturinvarianten und Grad-Prüfung.

use super::error::{InvalidSegmentReason, PathError};
use super::{Node, PathDirection, Segment, TransitType};
use std::collections::{HashMap, HashSet};

/// Konstruktionszustand eines Linienwegs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathState {
    /// Noch kein Segment
    #[default]
    Empty,
    /// Mindestens ein offener Randknoten
    Open,
    /// Rundkurs geschlossen oder Endmarkierung gesetzt
    Closed,
}

/// Seite, an der ein Linienweg erweitert wird
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddType {
    /// Vor dem aktuellen Startknoten
    Before,
    /// Nach dem aktuellen Endknoten
    After,
}

impl AddType {
    /// Das Wegende, das bei dieser Erweiterung wächst.
    pub fn end(self) -> PathEnd {
        match self {
            AddType::Before => PathEnd::Start,
            AddType::After => PathEnd::End,
        }
    }
}

/// Ende eines Linienwegs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathEnd {
    /// Anfang (erstes Segment)
    Start,
    /// Ende (letztes Segment)
    End,
}

impl PathEnd {
    /// Erweiterungsrichtung an diesem Ende.
    pub fn add_type(self) -> AddType {
        match self {
            PathEnd::Start => AddType::Before,
            PathEnd::End => AddType::After,
        }
    }
}

/// Ort, an dem eine Nachbarsuche laufen soll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborSearchTarget {
    /// Randknoten, an dem gesucht wird
    pub node_id: u64,
    /// Erweiterungsrichtung
    pub add_type: AddType,
    /// Positionshinweis für den Graph-Dienst
    pub order_context: u32,
}

/// Verletzung einer Strukturinvariante
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathInvariantViolation {
    /// Segment `index` endet nicht dort, wo Segment `index + 1` beginnt
    Gap {
        /// Index des vorderen Segments
        index: usize,
        /// Endknoten des vorderen Segments
        end_node_id: u64,
        /// Startknoten des folgenden Segments
        next_start_node_id: u64,
    },
    /// Segment mit abweichendem Verkehrsmittel
    TransitTypeMismatch {
        /// Betroffenes Segment
        segment_id: u64,
        /// Verkehrsmittel des Segments
        transit_type: TransitType,
    },
    /// Segment-ID kommt mehrfach vor
    DuplicateSegment {
        /// Mehrfach vorkommende ID
        segment_id: u64,
    },
}

impl std::fmt::Display for PathInvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gap {
                index,
                end_node_id,
                next_start_node_id,
            } => write!(
                f,
                "Lücke nach Segment #{}: endet an Knoten {}, nächstes beginnt an {}",
                index, end_node_id, next_start_node_id
            ),
            Self::TransitTypeMismatch {
                segment_id,
                transit_type,
            } => write!(
                f,
                "Segment {} hat abweichendes Verkehrsmittel {:?}",
                segment_id, transit_type
            ),
            Self::DuplicateSegment { segment_id } => {
                write!(f, "Segment {} kommt mehrfach vor", segment_id)
            }
        }
    }
}

/// Ein gerichteter Linienweg durch das Netz
#[derive(Debug, Clone)]
pub struct RoutePath {
    /// ID der Linie
    route_id: String,
    /// Richtung (Hin/Rück)
    direction: PathDirection,
    /// Verkehrsmittel aller Segmente
    transit_type: TransitType,
    /// Sichtbarkeit in der Kartenansicht
    pub visible: bool,
    /// Darstellungsfarbe (RGBA)
    pub color: [f32; 4],
    /// Vom Bediener gesetzte Endmarkierung
    terminal: bool,
    /// Segmente in Fahrtreihenfolge
    segments: Vec<Segment>,
}

impl RoutePath {
    /// Erstellt einen leeren Linienweg
    pub fn new(
        route_id: impl Into<String>,
        direction: PathDirection,
        transit_type: TransitType,
    ) -> Self {
        Self {
            route_id: route_id.into(),
            direction,
            transit_type,
            visible: true,
            color: crate::shared::options::PATH_COLOR_DEFAULT,
            terminal: false,
            segments: Vec::new(),
        }
    }

    /// Erstellt einen Linienweg aus gespeicherten Segmenten.
    ///
    /// Liefert alle Invariantenverletzungen, falls die Segmente keinen gültigen Weg bilden.
    pub fn from_segments(
        route_id: impl Into<String>,
        direction: PathDirection,
        transit_type: TransitType,
        segments: Vec<Segment>,
    ) -> Result<Self, Vec<PathInvariantViolation>> {
        let mut path = Self::new(route_id, direction, transit_type);
        path.segments = segments;
        let violations = path.validate();
        if violations.is_empty() {
            Ok(path)
        } else {
            Err(violations)
        }
    }

    /// ID der Linie
    pub fn route_id(&self) -> &str {
        &self.route_id
    }

    /// Richtung (Hin/Rück)
    pub fn direction(&self) -> PathDirection {
        self.direction
    }

    /// Verkehrsmittel aller Segmente
    pub fn transit_type(&self) -> TransitType {
        self.transit_type
    }

    /// Wechselt das Verkehrsmittel. Nur auf leeren Wegen möglich.
    ///
    /// Gibt zurück, ob der Weg danach das gewünschte Verkehrsmittel hat.
    pub fn set_transit_type(&mut self, transit_type: TransitType) -> bool {
        if self.segments.is_empty() {
            self.transit_type = transit_type;
        }
        self.transit_type == transit_type
    }

    /// Segmente in Fahrtreihenfolge
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Anzahl der Segmente
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Gibt zurück, ob der Weg leer ist
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Findet ein Segment per ID
    pub fn segment(&self, segment_id: u64) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id == segment_id)
    }

    /// Prüft ob ein Segment Teil des Weges ist
    pub fn contains_segment(&self, segment_id: u64) -> bool {
        self.segments.iter().any(|s| s.id == segment_id)
    }

    /// IDs aller Segmente in Fahrtreihenfolge
    pub fn segment_ids(&self) -> Vec<u64> {
        self.segments.iter().map(|s| s.id).collect()
    }

    /// Erster Knoten des Weges
    pub fn first_node(&self) -> Option<&Node> {
        self.segments.first().map(|s| &s.start_node)
    }

    /// Letzter Knoten des Weges
    pub fn last_node(&self) -> Option<&Node> {
        self.segments.last().map(|s| &s.end_node)
    }

    /// Knoten-ID am angegebenen Ende
    pub fn end_node_id(&self, end: PathEnd) -> Option<u64> {
        match end {
            PathEnd::Start => self.first_node().map(|n| n.id),
            PathEnd::End => self.last_node().map(|n| n.id),
        }
    }

    /// Knotenfolge `n0 = s0.start, nk = s(k-1).end`; leer für einen leeren Weg.
    pub fn node_sequence(&self) -> Vec<u64> {
        let Some(first) = self.segments.first() else {
            return Vec::new();
        };
        let mut nodes = Vec::with_capacity(self.segments.len() + 1);
        nodes.push(first.start_id());
        nodes.extend(self.segments.iter().map(|s| s.end_id()));
        nodes
    }

    /// Alle Knoten des Weges (dedupliziert, in Reihenfolge des ersten Auftretens)
    pub fn nodes(&self) -> Vec<&Node> {
        let mut seen = HashSet::new();
        let mut nodes = Vec::new();
        for segment in &self.segments {
            for node in [&segment.start_node, &segment.end_node] {
                if seen.insert(node.id) {
                    nodes.push(node);
                }
            }
        }
        nodes
    }

    /// Grad eines Knotens: ausgehende minus eingehende Segmente.
    pub fn degree(&self, node_id: u64) -> i64 {
        self.segments
            .iter()
            .map(|s| i64::from(s.start_id() == node_id) - i64::from(s.end_id() == node_id))
            .sum()
    }

    /// Grad aller Knoten des Weges
    pub fn degrees(&self) -> HashMap<u64, i64> {
        let mut degrees: HashMap<u64, i64> = HashMap::new();
        for s in &self.segments {
            *degrees.entry(s.start_id()).or_default() += 1;
            *degrees.entry(s.end_id()).or_default() -= 1;
        }
        degrees
    }

    /// Alle offenen Randknoten mit zugehöriger Erweiterungsrichtung.
    ///
    /// Reihenfolge: nach erstem Auftreten in der Knotenfolge.
    pub fn open_boundaries(&self) -> Vec<(u64, AddType)> {
        let degrees = self.degrees();
        let mut seen = HashSet::new();
        self.node_sequence()
            .into_iter()
            .filter(|id| seen.insert(*id))
            .filter_map(|id| match degrees.get(&id).copied().unwrap_or(0) {
                d if d > 0 => Some((id, AddType::Before)),
                d if d < 0 => Some((id, AddType::After)),
                _ => None,
            })
            .collect()
    }

    /// Aktueller Konstruktionszustand
    pub fn state(&self) -> PathState {
        if self.segments.is_empty() {
            PathState::Empty
        } else if self.terminal || self.degrees().values().all(|&d| d == 0) {
            PathState::Closed
        } else {
            PathState::Open
        }
    }

    /// Gibt zurück, ob die Endmarkierung gesetzt ist
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Setzt oder entfernt die Endmarkierung (auf leeren Wegen wirkungslos)
    pub fn set_terminal(&mut self, terminal: bool) {
        self.terminal = terminal && !self.segments.is_empty();
    }

    /// Positionshinweis für ein neues Segment auf der angegebenen Seite
    pub fn order_context(&self, add_type: AddType) -> u32 {
        match add_type {
            AddType::Before => 0,
            AddType::After => self.segments.len() as u32,
        }
    }

    /// Prüft ob am Knoten eine Nachbarsuche laufen soll.
    ///
    /// Grad > 0 → Erweiterung davor, Grad < 0 → danach, Grad 0 → keine Suche.
    pub fn search_target_at(&self, node_id: u64) -> Option<NeighborSearchTarget> {
        if self.state() == PathState::Closed {
            return None;
        }
        let add_type = match self.degree(node_id) {
            d if d > 0 => AddType::Before,
            d if d < 0 => AddType::After,
            _ => return None,
        };
        Some(NeighborSearchTarget {
            node_id,
            add_type,
            order_context: self.order_context(add_type),
        })
    }

    /// Prüft ob ein Segment an der angegebenen Seite eingefügt werden darf.
    pub fn check_insert(&self, segment: &Segment, add_type: AddType) -> Result<(), PathError> {
        if segment.transit_type != self.transit_type {
            return Err(PathError::invalid(
                segment.id,
                InvalidSegmentReason::TransitTypeMismatch {
                    expected: self.transit_type,
                    actual: segment.transit_type,
                },
            ));
        }
        if self.contains_segment(segment.id) {
            return Err(PathError::invalid(
                segment.id,
                InvalidSegmentReason::DuplicateSegment,
            ));
        }
        if self.state() == PathState::Closed {
            return Err(PathError::invalid(segment.id, InvalidSegmentReason::PathClosed));
        }

        let (expected, actual) = match add_type {
            AddType::After => (self.last_node().map(|n| n.id), segment.start_id()),
            AddType::Before => (self.first_node().map(|n| n.id), segment.end_id()),
        };
        match expected {
            Some(expected_node_id) if expected_node_id != actual => Err(PathError::invalid(
                segment.id,
                InvalidSegmentReason::NotContiguous {
                    expected_node_id,
                    actual_node_id: actual,
                },
            )),
            _ => Ok(()),
        }
    }

    /// Fügt ein Segment an der angegebenen Seite ein (nach Prüfung).
    pub fn insert(&mut self, segment: Segment, add_type: AddType) -> Result<(), PathError> {
        self.check_insert(&segment, add_type)?;
        match add_type {
            AddType::After => self.segments.push(segment),
            AddType::Before => self.segments.insert(0, segment),
        }
        Ok(())
    }

    /// Fügt eine zusammenhängende Segmentfolge atomar ein.
    ///
    /// Eine rückwärts ausgewählte Folge (`run[i].start == run[i + 1].end`) wird vorher in
    /// Wegreihenfolge gebracht. Leerer Weg → Folge wird übernommen. Beginnt die Folge am
    /// Endknoten → angehängt, endet sie am Startknoten → vorangestellt.
    /// Bei jedem Fehler bleibt der Weg unverändert.
    pub fn insert_run(&mut self, run: &[Segment]) -> Result<AddType, PathError> {
        let ordered: Vec<&Segment> = if is_backward_run(run) {
            run.iter().rev().collect()
        } else {
            run.iter().collect()
        };
        let (Some(run_first), Some(run_last)) = (ordered.first(), ordered.last()) else {
            return Ok(AddType::After);
        };

        let add_type = match (self.first_node(), self.last_node()) {
            (Some(_), Some(last)) if run_first.start_id() == last.id => AddType::After,
            (Some(first), Some(_)) if run_last.end_id() == first.id => AddType::Before,
            (Some(_), Some(last)) => {
                return Err(PathError::invalid(
                    run_first.id,
                    InvalidSegmentReason::NotContiguous {
                        expected_node_id: last.id,
                        actual_node_id: run_first.start_id(),
                    },
                ));
            }
            _ => AddType::After,
        };

        let mut scratch = self.clone();
        match add_type {
            AddType::After => {
                for segment in &ordered {
                    scratch.insert((*segment).clone(), AddType::After)?;
                }
            }
            AddType::Before => {
                for segment in ordered.iter().rev() {
                    scratch.insert((*segment).clone(), AddType::Before)?;
                }
            }
        }
        self.segments = scratch.segments;
        Ok(add_type)
    }

    /// Entfernt das äußerste Segment am angegebenen Ende.
    ///
    /// Setzt die Endmarkierung zurück, der Weg ist danach wieder offen.
    pub fn remove_boundary(&mut self, end: PathEnd) -> Option<Segment> {
        if self.segments.is_empty() {
            return None;
        }
        let removed = match end {
            PathEnd::Start => self.segments.remove(0),
            PathEnd::End => self.segments.pop()?,
        };
        self.terminal = false;
        Some(removed)
    }

    /// Prüft alle Strukturinvarianten und liefert sämtliche Verletzungen.
    pub fn validate(&self) -> Vec<PathInvariantViolation> {
        let mut violations = Vec::new();

        for (index, pair) in self.segments.windows(2).enumerate() {
            if pair[0].end_id() != pair[1].start_id() {
                violations.push(PathInvariantViolation::Gap {
                    index,
                    end_node_id: pair[0].end_id(),
                    next_start_node_id: pair[1].start_id(),
                });
            }
        }

        let mut seen = HashSet::new();
        for segment in &self.segments {
            if segment.transit_type != self.transit_type {
                violations.push(PathInvariantViolation::TransitTypeMismatch {
                    segment_id: segment.id,
                    transit_type: segment.transit_type,
                });
            }
            if !seen.insert(segment.id) {
                violations.push(PathInvariantViolation::DuplicateSegment {
                    segment_id: segment.id,
                });
            }
        }

        violations
    }
}

/// Folge rückwärts entlang des Weges ausgewählt; vorwärts zusammenhängende Folgen haben Vorrang.
fn is_backward_run(run: &[Segment]) -> bool {
    run.len() > 1
        && !run.windows(2).all(|w| w[0].end_id() == w[1].start_id())
        && run.windows(2).all(|w| w[0].start_id() == w[1].end_id())
}
