//! Use-Case-Funktionen auf der Session.
//!
//! - `path_editing`: Anhängen, Voranstellen, Randsegment entfernen, Teilstrecke einfügen, Endmarkierung
//! - `neighbor_search`: Nachbarsuche starten, Antwort übernehmen, Kandidaten verwerfen
//! - `copy_preview`: Vorschau einer Kopier-Auswahl
//! - `history`: Undo/Redo

pub mod copy_preview;
pub mod history;
pub mod neighbor_search;
pub mod path_editing;
