//! Application-Layer: Controller, Session, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod neighbor_resolver;
pub mod render_scene;
/// Session-Zustand
///
/// Eine Session besitzt genau einen Linienweg samt Kandidaten, Vorschau, Verlauf und Hinweisen.
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::PathController;
pub use events::{InteractionEvent, PathCommand};
pub use neighbor_resolver::{NeighborRequest, NeighborResolver, NeighborResponse};
pub use render_scene::build as build_render_scene;
pub use state::{
    CopyPreviewState, NeighborState, Notification, NotificationLevel, PathSession, SearchStatus,
};
pub use use_cases::path_editing::{ChangeSet, PathChange};
