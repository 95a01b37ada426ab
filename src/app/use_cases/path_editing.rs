//! Use-Case: Linienweg verändern (anhängen, voranstellen, Randsegment entfernen,
//! Teilstrecke einfügen, Endmarkierung).
//!
//! Jede erfolgreiche Mutation legt vorher einen Undo-Snapshot an, verwirft die
//! Kandidaten samt laufender Suche und liefert ein [`ChangeSet`].

use crate::app::PathSession;
use crate::core::{
    AddType, CopyRange, NeighborSearchTarget, PathEnd, PathError, PathState, RoutePath, Segment,
};
use std::sync::Arc;

/// Art der durchgeführten Änderung
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathChange {
    /// Segment an das Ende angehängt
    Appended { segment_id: u64 },
    /// Segment vor den Anfang gesetzt
    Prepended { segment_id: u64 },
    /// Äußerstes Segment eines Endes entfernt
    BoundaryRemoved { end: PathEnd, segment_id: u64 },
    /// Kopierte Teilstrecke eingefügt
    RangeInserted {
        add_type: AddType,
        segment_ids: Vec<u64>,
    },
    /// Endmarkierung geändert
    TerminalChanged { terminal: bool },
    /// Früherer Stand per Undo/Redo wiederhergestellt
    Restored,
}

/// Änderungsbeschreibung für die Darstellung
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSet {
    /// Was geändert wurde
    pub change: PathChange,
    /// Zustand nach der Änderung
    pub state: PathState,
    /// Wo als Nächstes nach Nachbarn gesucht werden soll
    pub pending_search: Option<NeighborSearchTarget>,
}

impl ChangeSet {
    /// Bewertet den Grad am betroffenen Ende neu.
    fn at_end(change: PathChange, path: &RoutePath, end: PathEnd) -> Self {
        Self {
            change,
            state: path.state(),
            pending_search: path
                .end_node_id(end)
                .and_then(|node_id| path.search_target_at(node_id)),
        }
    }

    /// Wie [`ChangeSet::at_end`], aber mit dem ersten offenen Ende (End vor Start).
    pub(crate) fn at_open_end(change: PathChange, path: &RoutePath) -> Self {
        Self {
            change,
            state: path.state(),
            pending_search: next_search_target(path),
        }
    }
}

/// Erstes offenes Ende des Linienwegs, an dem gesucht werden kann (End vor Start).
pub fn next_search_target(path: &RoutePath) -> Option<NeighborSearchTarget> {
    [PathEnd::End, PathEnd::Start]
        .into_iter()
        .filter_map(|end| path.end_node_id(end))
        .find_map(|node_id| path.search_target_at(node_id))
}

/// Hängt ein Segment an den Endknoten an.
pub fn append_segment(session: &mut PathSession, segment: Segment) -> Result<ChangeSet, PathError> {
    insert_segment(session, segment, AddType::After)
}

/// Setzt ein Segment vor den Startknoten.
pub fn prepend_segment(
    session: &mut PathSession,
    segment: Segment,
) -> Result<ChangeSet, PathError> {
    insert_segment(session, segment, AddType::Before)
}

fn insert_segment(
    session: &mut PathSession,
    segment: Segment,
    add_type: AddType,
) -> Result<ChangeSet, PathError> {
    if let Err(e) = session.path.check_insert(&segment, add_type) {
        log::warn!("Segment {} abgelehnt: {}", segment.id, e);
        return Err(e);
    }

    // Snapshot VOR Mutation
    session.record_undo_snapshot();

    let segment_id = segment.id;
    session.path_mut().insert(segment, add_type)?;
    session.reset_neighbor_search();

    let change = match add_type {
        AddType::After => PathChange::Appended { segment_id },
        AddType::Before => PathChange::Prepended { segment_id },
    };
    log::info!(
        "Segment {} {} ({} Segmente, {:?})",
        segment_id,
        match add_type {
            AddType::After => "angehängt",
            AddType::Before => "vorangestellt",
        },
        session.path.len(),
        session.path.state()
    );
    Ok(ChangeSet::at_end(change, &session.path, add_type.end()))
}

/// Entfernt das äußerste Segment am angegebenen Ende.
///
/// Auf einem leeren Linienweg passiert nichts. Die Endmarkierung wird zurückgesetzt.
pub fn remove_boundary_segment(session: &mut PathSession, end: PathEnd) -> Option<ChangeSet> {
    if session.path.is_empty() {
        log::debug!("Randsegment entfernen: Linienweg ist leer");
        return None;
    }

    session.record_undo_snapshot();
    let removed = session.path_mut().remove_boundary(end)?;
    session.reset_neighbor_search();

    log::info!(
        "Randsegment {} am {:?}-Ende entfernt ({} Segmente)",
        removed.id,
        end,
        session.path.len()
    );
    Some(ChangeSet::at_end(
        PathChange::BoundaryRemoved {
            end,
            segment_id: removed.id,
        },
        &session.path,
        end,
    ))
}

/// Fügt eine Teilstrecke eines registrierten Quell-Linienwegs ein.
///
/// Die ganze Folge wird geprüft, bevor der Linienweg verändert wird.
pub fn insert_copied_range(
    session: &mut PathSession,
    range: &CopyRange,
) -> Result<ChangeSet, PathError> {
    let source = session
        .source_paths
        .get(&range.source_path_key)
        .ok_or_else(|| range.not_found())?;
    let run = range.resolve(source)?;
    if run.is_empty() {
        log::info!(
            "Keine Segmente zwischen Knoten {} und {} in '{}'",
            range.start_node_id,
            range.end_node_id,
            range.source_path_key
        );
        return Err(range.not_found());
    }

    let mut updated = RoutePath::clone(&session.path);
    let add_type = match updated.insert_run(&run) {
        Ok(add_type) => add_type,
        Err(e) => {
            log::warn!("Teilstrecke aus '{}' abgelehnt: {}", range.source_path_key, e);
            return Err(e);
        }
    };

    session.record_undo_snapshot();
    session.path = Arc::new(updated);
    session.reset_neighbor_search();
    session.copy_preview = None;

    let segment_ids: Vec<u64> = run.iter().map(|s| s.id).collect();
    log::info!(
        "{} Segmente aus '{}' eingefügt ({:?})",
        segment_ids.len(),
        range.source_path_key,
        add_type
    );
    Ok(ChangeSet::at_end(
        PathChange::RangeInserted {
            add_type,
            segment_ids,
        },
        &session.path,
        add_type.end(),
    ))
}

/// Setzt oder entfernt die Endmarkierung. Ohne Wirkung auf leeren Wegen oder ohne Änderung.
pub fn set_terminal(session: &mut PathSession, terminal: bool) -> Option<ChangeSet> {
    if session.path.is_empty() || session.path.is_terminal() == terminal {
        return None;
    }

    session.record_undo_snapshot();
    session.path_mut().set_terminal(terminal);
    session.reset_neighbor_search();

    log::info!(
        "Endmarkierung {} ({:?})",
        if terminal { "gesetzt" } else { "entfernt" },
        session.path.state()
    );
    Some(ChangeSet::at_open_end(
        PathChange::TerminalChanged { terminal },
        &session.path,
    ))
}
