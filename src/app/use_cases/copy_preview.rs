//! Use-Case: Vorschau einer Kopier-Auswahl (kopierte und verworfene Segmente).

use crate::app::state::CopyPreviewState;
use crate::app::PathSession;
use crate::core::{CopyRange, PathError};

/// Berechnet die Vorschau für eine Auswahl auf einem registrierten Quell-Linienweg.
///
/// Fehlt der Quellweg oder einer der Knoten, oder liegt nichts dazwischen,
/// wird die Vorschau geleert und `CopyRangeNotFound` geliefert.
pub fn preview_copy_range(session: &mut PathSession, range: CopyRange) -> Result<(), PathError> {
    session.copy_preview = None;

    let source = session
        .source_paths
        .get(&range.source_path_key)
        .ok_or_else(|| range.not_found())?;
    if range.resolve(source)?.is_empty() {
        return Err(range.not_found());
    }

    let preview = range.preview(source);
    log::debug!(
        "Kopier-Vorschau '{}': {} kopiert, {} verworfen",
        range.source_path_key,
        preview.to_copy.len(),
        preview.not_to_copy.len()
    );
    session.copy_preview = Some(CopyPreviewState { range, preview });
    Ok(())
}

/// Schließt die Kopier-Vorschau.
pub fn clear_copy_preview(session: &mut PathSession) {
    session.copy_preview = None;
}
