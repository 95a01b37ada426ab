//! Handler für die Nachbarsuche.

use crate::app::use_cases::neighbor_search;
use crate::app::PathSession;
use crate::core::NeighborSearchTarget;

/// Startet eine Nachbarsuche am Randknoten.
pub fn request(session: &mut PathSession, target: NeighborSearchTarget) {
    neighbor_search::begin_search(session, target);
}

/// Verwirft Kandidaten und laufende Suche.
pub fn clear(session: &mut PathSession) {
    neighbor_search::clear(session);
}
