//! Use-Case: Undo/Redo auf dem Linienweg.

use super::path_editing::{ChangeSet, PathChange};
use crate::app::history::Snapshot;
use crate::app::PathSession;

/// Stellt den Stand vor der letzten Mutation wieder her.
pub fn undo(session: &mut PathSession) -> Option<ChangeSet> {
    let current = Snapshot::of(&session.path);
    let Some(prev) = session.history.pop_undo_with_current(current) else {
        log::debug!("Undo: nichts zu tun");
        return None;
    };
    Some(restore(session, prev, "Undo"))
}

/// Wiederholt die zuletzt rückgängig gemachte Mutation.
pub fn redo(session: &mut PathSession) -> Option<ChangeSet> {
    let current = Snapshot::of(&session.path);
    let Some(next) = session.history.pop_redo_with_current(current) else {
        log::debug!("Redo: nichts zu tun");
        return None;
    };
    Some(restore(session, next, "Redo"))
}

fn restore(session: &mut PathSession, snap: Snapshot, label: &str) -> ChangeSet {
    session.path = snap.path;
    session.reset_neighbor_search();
    log::info!("{} ausgeführt ({} Segmente)", label, session.path.len());
    ChangeSet::at_open_end(PathChange::Restored, &session.path)
}
