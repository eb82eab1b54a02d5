//! All data types for the marker-graph library.

pub mod edge;
pub mod error;
pub mod ids;
pub mod vertex;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use ids::{EdgeId, Entity, MarkerId, VertexId};
pub use vertex::Vertex;

/// Number of marker ids a graph can hand out. The pool never grows.
pub const MARKER_COUNT: usize = 64;
