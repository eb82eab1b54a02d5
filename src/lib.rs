//! marker-graph: a directed graph container with enumerable markers.
//!
//! Vertices carry an integer payload and directed edges connect them.
//! Any vertex or edge can carry up to [`MARKER_COUNT`] boolean markers,
//! allocated from a fixed per-graph pool; each marker knows exactly which
//! entities carry it, and removing an entity or freeing a marker keeps
//! both sides of that relationship in step.

pub mod cli;
pub mod dump;
pub mod graph;
pub mod list;
pub mod marker;
pub mod types;

// Re-export commonly used types at the crate root
pub use dump::{render_graph, GraphSnapshot};
pub use graph::{EntityRef, Graph, GraphBuilder};
pub use list::OrderedList;
pub use marker::{Marked, MarkedElement, MarkerDescriptor, MarkerRegistry, MarkerSlots};
pub use types::{
    Edge, EdgeId, Entity, GraphError, GraphResult, MarkerId, Vertex, VertexId, MARKER_COUNT,
};
