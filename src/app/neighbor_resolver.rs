//! Nachbarsuche am Randknoten mit Generation-Token ("letzte Anfrage gewinnt").
//!
//! Ablauf in drei Schritten, damit die Session während der Abfrage nicht geliehen bleibt:
//! 1. [`NeighborResolver::begin`] (synchron): erhöht die Generation, baut die Anfrage.
//! 2. [`NeighborResolver::fetch`] (async): fragt den Graph-Dienst, filtert und sortiert.
//! 3. [`NeighborResolver::accept`] (synchron): übernimmt nur die Antwort der aktuellen Generation.

use crate::core::{
    AddType, NeighborCandidate, NeighborSearchTarget, PathError, RoutePath, TransitType, UsagePath,
};
use crate::graph::{GraphQueryService, NeighborQuery, NeighborSegments};
use indexmap::IndexMap;

/// Eine ausgegebene Nachbaranfrage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborRequest {
    /// Generation zum Ausgabezeitpunkt
    pub generation: u64,
    /// Anfrage an den Graph-Dienst
    pub query: NeighborQuery,
    /// Leerer Linienweg: Startsegmente statt Nachbarn abfragen
    pub starting_at: bool,
    /// Der bearbeitete Linienweg (aus den Nutzungen herausgefiltert)
    pub edited_path: UsagePath,
}

/// Antwort auf eine [`NeighborRequest`]
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborResponse {
    /// Generation der zugehörigen Anfrage
    pub generation: u64,
    /// Gefilterte Kandidaten oder Abfragefehler
    pub result: Result<NeighborSegments, PathError>,
}

/// Verwaltet die Generation laufender Nachbarsuchen
#[derive(Debug, Clone, Default)]
pub struct NeighborResolver {
    generation: u64,
    in_flight: bool,
}

impl NeighborResolver {
    /// Erstellt einen Resolver ohne laufende Suche
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuelle Generation
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Gibt zurück, ob eine Suche aussteht
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Beginnt eine neue Suche und verdrängt jede laufende.
    ///
    /// Auf einem leeren Linienweg werden alle am Knoten beginnenden Segmente abgefragt
    /// (immer `AddType::After`, Positionshinweis 0).
    pub fn begin(&mut self, path: &RoutePath, target: NeighborSearchTarget) -> NeighborRequest {
        self.generation += 1;
        self.in_flight = true;

        let starting_at = path.is_empty();
        let (add_type, order_context) = if starting_at {
            (AddType::After, 0)
        } else {
            (target.add_type, target.order_context)
        };

        log::debug!(
            "Nachbarsuche #{} an Knoten {} ({:?})",
            self.generation,
            target.node_id,
            add_type
        );

        NeighborRequest {
            generation: self.generation,
            query: NeighborQuery {
                node_id: target.node_id,
                order_context,
                transit_type: path.transit_type(),
                existing_segment_ids: path.segment_ids(),
                add_type,
            },
            starting_at,
            edited_path: UsagePath::new(path.route_id(), path.direction()),
        }
    }

    /// Bricht die laufende Suche ab; späte Antworten werden verworfen.
    pub fn cancel(&mut self) {
        if self.in_flight {
            log::debug!("Nachbarsuche #{} abgebrochen", self.generation);
        }
        self.generation += 1;
        self.in_flight = false;
    }

    /// Führt die Abfrage aus. Leiht weder Session noch Resolver.
    pub async fn fetch<S: GraphQueryService>(
        service: &S,
        request: NeighborRequest,
    ) -> NeighborResponse {
        let query = &request.query;
        let fetched = if request.starting_at {
            service
                .fetch_segments_starting_at(query.node_id, query.order_context)
                .await
                .map(|candidates| NeighborSegments {
                    candidates,
                    add_type: AddType::After,
                })
        } else {
            service.fetch_neighbor_segments(query).await
        };

        let result = match fetched {
            Ok(response) => Ok(NeighborSegments {
                candidates: filter_candidates(response.candidates, query, &request.edited_path),
                add_type: query.add_type,
            }),
            Err(e) => {
                log::warn!("Nachbarsuche an Knoten {} fehlgeschlagen: {:#}", query.node_id, e);
                Err(PathError::graph_fetch(&e))
            }
        };

        NeighborResponse {
            generation: request.generation,
            result,
        }
    }

    /// Übernimmt eine Antwort, falls sie zur aktuellen Generation gehört.
    ///
    /// `None` bedeutet: veraltet, still verworfen.
    pub fn accept(
        &mut self,
        response: NeighborResponse,
    ) -> Option<Result<NeighborSegments, PathError>> {
        if !self.in_flight || response.generation != self.generation {
            log::debug!(
                "Veraltete Nachbarantwort #{} verworfen (aktuell #{})",
                response.generation,
                self.generation
            );
            return None;
        }
        self.in_flight = false;
        Some(response.result)
    }
}

/// Filtert, dedupliziert und sortiert die Kandidaten einer Dienstantwort.
///
/// Behalten werden Segmente mit passendem Verkehrsmittel, die am Randknoten anliegen
/// und noch nicht im Linienweg sind. Doppelte IDs werden zusammengeführt, der
/// bearbeitete Linienweg zählt nicht als Nutzung. Häufig genutzte Segmente zuerst.
pub fn filter_candidates(
    candidates: Vec<NeighborCandidate>,
    query: &NeighborQuery,
    edited_path: &UsagePath,
) -> Vec<NeighborCandidate> {
    let mut by_id: IndexMap<u64, NeighborCandidate> = IndexMap::new();

    for candidate in candidates {
        if !is_legal_extension(&candidate, query.node_id, query.add_type, query.transit_type)
            || query.existing_segment_ids.contains(&candidate.segment.id)
        {
            continue;
        }
        let entry = by_id
            .entry(candidate.segment.id)
            .or_insert_with(|| NeighborCandidate::unused(candidate.segment.clone()));
        for usage in candidate.usage_paths {
            if usage != *edited_path && !entry.usage_paths.contains(&usage) {
                entry.usage_paths.push(usage);
            }
        }
    }

    let mut result: Vec<NeighborCandidate> = by_id.into_values().collect();
    result.sort_by(|a, b| {
        b.usage_count()
            .cmp(&a.usage_count())
            .then(a.segment.id.cmp(&b.segment.id))
    });
    result
}

fn is_legal_extension(
    candidate: &NeighborCandidate,
    node_id: u64,
    add_type: AddType,
    transit_type: TransitType,
) -> bool {
    let segment = &candidate.segment;
    segment.transit_type == transit_type
        && match add_type {
            AddType::After => segment.start_id() == node_id,
            AddType::Before => segment.end_id() == node_id,
        }
}
