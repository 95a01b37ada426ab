//! Handler für Undo/Redo-Operationen.

use crate::app::use_cases::history;
use crate::app::use_cases::path_editing::ChangeSet;
use crate::app::PathSession;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(session: &mut PathSession) -> Option<ChangeSet> {
    history::undo(session)
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(session: &mut PathSession) -> Option<ChangeSet> {
    history::redo(session)
}
