//! Feature-Handler für die PathCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs und
//! wandelt Engine-Fehler in Hinweise der Session um. Der Controller dispatcht
//! an die passende Handler-Funktion.

pub mod copy;
pub mod editing;
pub mod history;
pub mod neighbors;

use crate::app::state::NotificationLevel;
use crate::app::PathSession;
use crate::core::PathError;

/// Macht einen Engine-Fehler als Warnung sichtbar.
fn report(session: &mut PathSession, error: PathError) {
    session.notify(NotificationLevel::Warning, error.to_string());
}
