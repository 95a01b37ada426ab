//! Handler für die Kopier-Vorschau.

use super::report;
use crate::app::use_cases::copy_preview;
use crate::app::PathSession;
use crate::core::CopyRange;

/// Zeigt die Vorschau einer Kopier-Auswahl an.
pub fn preview(session: &mut PathSession, range: CopyRange) {
    if let Err(e) = copy_preview::preview_copy_range(session, range) {
        report(session, e);
    }
}

/// Schließt die Kopier-Vorschau.
pub fn clear_preview(session: &mut PathSession) {
    copy_preview::clear_copy_preview(session);
}
