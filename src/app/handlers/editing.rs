//! Handler für Mutationen des Linienwegs.

use super::report;
use crate::app::use_cases::path_editing::{self, ChangeSet};
use crate::app::PathSession;
use crate::core::{CopyRange, PathEnd, Segment};

/// Hängt ein Segment an.
pub fn append(session: &mut PathSession, segment: Segment) -> Option<ChangeSet> {
    path_editing::append_segment(session, segment)
        .map_err(|e| report(session, e))
        .ok()
}

/// Stellt ein Segment voran.
pub fn prepend(session: &mut PathSession, segment: Segment) -> Option<ChangeSet> {
    path_editing::prepend_segment(session, segment)
        .map_err(|e| report(session, e))
        .ok()
}

/// Entfernt das äußerste Segment an einem Ende.
pub fn remove_boundary(session: &mut PathSession, end: PathEnd) -> Option<ChangeSet> {
    path_editing::remove_boundary_segment(session, end)
}

/// Fügt eine kopierte Teilstrecke ein.
pub fn insert_copied_range(session: &mut PathSession, range: &CopyRange) -> Option<ChangeSet> {
    path_editing::insert_copied_range(session, range)
        .map_err(|e| report(session, e))
        .ok()
}

/// Setzt oder entfernt die Endmarkierung.
pub fn set_terminal(session: &mut PathSession, terminal: bool) -> Option<ChangeSet> {
    path_editing::set_terminal(session, terminal)
}
