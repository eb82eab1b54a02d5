//! Error types for the marker-graph library.

use thiserror::Error;

use super::ids::{EdgeId, MarkerId, VertexId};

/// All errors that can occur in the marker-graph library.
///
/// Teardown never fails: removing an absent vertex or edge, unsetting a
/// marker that is not set and freeing an unallocated marker are no-ops.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex not found by ID.
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),

    /// Edge not found by ID.
    #[error("Edge {0} not found")]
    EdgeNotFound(EdgeId),

    /// Every marker id in the pool is already allocated.
    #[error("No marker available: all {0} markers are allocated")]
    MarkersExhausted(usize),

    /// Marker id is inside the pool but has not been allocated.
    #[error("Marker {0} is not allocated")]
    MarkerNotAllocated(MarkerId),

    /// Raw marker id outside the pool.
    #[error("Marker id {0} is out of range")]
    InvalidMarker(u32),

    /// Malformed command-line input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for marker-graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
