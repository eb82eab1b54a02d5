//! The directed edge struct.

use crate::marker::{Marked, MarkerSlots};

use super::VertexId;

/// A directed arc between two vertices of the same graph.
#[derive(Debug, Clone)]
pub struct Edge {
    /// Vertex the edge leaves.
    pub(crate) source: VertexId,
    /// Vertex the edge enters.
    pub(crate) target: VertexId,
    pub(crate) markers: MarkerSlots,
}

impl Edge {
    pub(crate) fn new(source: VertexId, target: VertexId) -> Self {
        Self {
            source,
            target,
            markers: MarkerSlots::new(),
        }
    }

    /// Source vertex.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Destination vertex.
    pub fn target(&self) -> VertexId {
        self.target
    }

    /// Whether the edge starts and ends at the same vertex.
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

impl Marked for Edge {
    fn markers(&self) -> &MarkerSlots {
        &self.markers
    }
}
