//! Route Path Editor Engine.
//! Konstruktion und Bearbeitung von Linienwegen als Library, für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod graph;
pub mod json;
pub mod shared;

pub use app::{
    ChangeSet, InteractionEvent, Notification, NotificationLevel, PathChange, PathCommand,
    PathController, PathSession, SearchStatus,
};
pub use core::{
    AddType, CopyRange, NeighborCandidate, Node, NodeKind, PathDirection, PathEnd, PathError,
    PathLength, PathState, RoutePath, Segment, TransitType, UsagePath,
};
pub use graph::{GraphQueryService, InMemoryGraphService};
pub use shared::{EditorOptions, RenderScene};
pub use json::{parse_route_path, write_route_path};
