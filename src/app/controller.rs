//! Controller für die zentrale Event-Verarbeitung einer Linienweg-Session.

use super::neighbor_resolver::NeighborResponse;
use super::render_scene;
use super::use_cases::neighbor_search;
use super::use_cases::path_editing::ChangeSet;
use super::{InteractionEvent, PathCommand, PathSession};
use crate::graph::GraphQueryService;
use crate::shared::RenderScene;

/// Orchestriert Interaktions-Events und Use-Cases auf der Session.
///
/// Fehler der Engine verlassen den Controller nie; sie landen als Hinweise in der Session.
#[derive(Default)]
pub struct PathController;

impl PathController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet ein Event über das Event->Command Mapping.
    pub fn handle_intent(
        &mut self,
        session: &mut PathSession,
        event: InteractionEvent,
    ) -> Vec<ChangeSet> {
        let commands = super::intent_mapping::map_intent_to_commands(session, event);
        commands
            .into_iter()
            .filter_map(|command| self.handle_command(session, command))
            .collect()
    }

    /// Führt einen Command aus. Dispatcht an Feature-Handler in `handlers/`.
    ///
    /// Meldet die Mutation ein offenes Ende, wird dort direkt die nächste Nachbarsuche ausgegeben.
    pub fn handle_command(
        &mut self,
        session: &mut PathSession,
        command: PathCommand,
    ) -> Option<ChangeSet> {
        session.command_log.record(&command);
        use super::handlers;

        let change = match command {
            // === Mutationen ===
            PathCommand::AppendSegment { segment } => handlers::editing::append(session, segment),
            PathCommand::PrependSegment { segment } => {
                handlers::editing::prepend(session, segment)
            }
            PathCommand::RemoveBoundary { end } => handlers::editing::remove_boundary(session, end),
            PathCommand::InsertCopiedRange { range } => {
                handlers::editing::insert_copied_range(session, &range)
            }
            PathCommand::SetTerminal { terminal } => {
                handlers::editing::set_terminal(session, terminal)
            }

            // === Nachbarsuche ===
            PathCommand::RequestNeighbors { target } => {
                handlers::neighbors::request(session, target);
                None
            }
            PathCommand::ClearNeighbors => {
                handlers::neighbors::clear(session);
                None
            }

            // === Kopier-Vorschau ===
            PathCommand::PreviewCopyRange { range } => {
                handlers::copy::preview(session, range);
                None
            }
            PathCommand::ClearCopyPreview => {
                handlers::copy::clear_preview(session);
                None
            }

            // === History ===
            PathCommand::Undo => handlers::history::undo(session),
            PathCommand::Redo => handlers::history::redo(session),
        };

        if let Some(target) = change.as_ref().and_then(|c| c.pending_search) {
            handlers::neighbors::request(session, target);
        }
        change
    }

    /// Führt die ausstehende Nachbaranfrage aus und übernimmt die Antwort.
    ///
    /// Für Hosts ohne eigenen Task-Runner; sonst `take_neighbor_request` +
    /// `NeighborResolver::fetch` + [`PathController::apply_neighbor_response`].
    pub async fn resolve_neighbors<S: GraphQueryService>(
        &mut self,
        session: &mut PathSession,
        service: &S,
    ) -> bool {
        neighbor_search::resolve_pending(session, service).await
    }

    /// Übernimmt eine extern ausgeführte Nachbarantwort, sofern sie noch aktuell ist.
    pub fn apply_neighbor_response(
        &mut self,
        session: &mut PathSession,
        response: NeighborResponse,
    ) -> bool {
        neighbor_search::apply_response(session, response)
    }

    /// Baut die Render-Szene aus der aktuellen Session.
    pub fn build_render_scene(&self, session: &PathSession) -> RenderScene {
        render_scene::build(session)
    }
}
