//! Anbindung des externen Graph-Dienstes.

pub mod in_memory;
pub mod service;

pub use in_memory::{GraphSnapshot, InMemoryGraphService, SegmentUsage};
pub use service::{GraphQueryService, NeighborQuery, NeighborSegments};
