//! In-memory graph: the core data structure and its builder.

pub mod builder;
pub mod marker_graph;

pub use builder::GraphBuilder;
pub use marker_graph::{EntityRef, Graph};
