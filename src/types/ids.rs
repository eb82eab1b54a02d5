//! Handle types for vertices, edges and markers.

use serde::Serialize;

use super::error::{GraphError, GraphResult};
use super::MARKER_COUNT;

/// Handle of a vertex inside one graph.
///
/// Handles are assigned sequentially and never reused, so a handle kept past
/// the vertex's removal resolves to nothing instead of to a newer vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct VertexId(pub(crate) u64);

/// Handle of an edge inside one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EdgeId(pub(crate) u64);

impl VertexId {
    /// The raw sequence number of this handle.
    pub fn index(self) -> u64 {
        self.0
    }
}

impl EdgeId {
    /// The raw sequence number of this handle.
    pub fn index(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A marker id in `[0, MARKER_COUNT)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MarkerId(u8);

impl MarkerId {
    /// Convert a raw id, returning None when it lies outside the pool.
    pub fn new(raw: u32) -> Option<Self> {
        if (raw as usize) < MARKER_COUNT {
            Some(Self(raw as u8))
        } else {
            None
        }
    }

    /// Like [`MarkerId::new`], but reports out-of-range ids as an error.
    pub fn try_from_raw(raw: u32) -> GraphResult<Self> {
        Self::new(raw).ok_or(GraphError::InvalidMarker(raw))
    }

    /// Slot index of this marker.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every id in the pool, ascending.
    pub fn all() -> impl Iterator<Item = MarkerId> {
        (0..MARKER_COUNT as u8).map(MarkerId)
    }
}

impl std::fmt::Display for MarkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Discriminated reference to the vertex or edge that carries a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Entity {
    /// A vertex of the graph.
    Vertex(VertexId),
    /// An edge of the graph.
    Edge(EdgeId),
}

impl Entity {
    /// Return a human-readable name for this entity kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Vertex(_) => "vertex",
            Self::Edge(_) => "edge",
        }
    }
}

impl From<VertexId> for Entity {
    fn from(id: VertexId) -> Self {
        Self::Vertex(id)
    }
}

impl From<EdgeId> for Entity {
    fn from(id: EdgeId) -> Self {
        Self::Edge(id)
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vertex(id) => write!(f, "{}", id),
            Self::Edge(id) => write!(f, "{}", id),
        }
    }
}
