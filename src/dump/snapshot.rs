//! Serializable point-in-time view of a graph, for JSON output.

use serde::Serialize;

use crate::graph::Graph;
use crate::marker::{Marked, MarkedElement};
use crate::types::{EdgeId, MarkerId, VertexId};

/// A vertex as seen in a snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct VertexSnapshot {
    /// Vertex handle.
    pub id: VertexId,
    /// Integer payload.
    pub payload: u32,
    /// Incoming edges in attach order.
    pub incoming: Vec<EdgeId>,
    /// Outgoing edges in attach order.
    pub outgoing: Vec<EdgeId>,
    /// Markers set on the vertex.
    pub markers: Vec<MarkerId>,
}

/// An edge as seen in a snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeSnapshot {
    /// Edge handle.
    pub id: EdgeId,
    /// Source vertex.
    pub source: VertexId,
    /// Destination vertex.
    pub target: VertexId,
    /// Markers set on the edge.
    pub markers: Vec<MarkerId>,
}

/// An allocated marker and the entities carrying it.
#[derive(Debug, Clone, Serialize)]
pub struct MarkerSnapshot {
    /// Marker id.
    pub id: MarkerId,
    /// Membership records in the order the marker was set.
    pub members: Vec<MarkedElement>,
}

/// Everything queryable about a graph at one moment.
#[derive(Debug, Clone, Serialize)]
pub struct GraphSnapshot {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of edges.
    pub edge_count: usize,
    /// Vertices in creation order.
    pub vertices: Vec<VertexSnapshot>,
    /// Edges in creation order.
    pub edges: Vec<EdgeSnapshot>,
    /// Allocated markers, ascending by id.
    pub markers: Vec<MarkerSnapshot>,
}

impl GraphSnapshot {
    /// Capture the current state of `graph`.
    pub fn capture(graph: &Graph) -> Self {
        let vertices = graph
            .vertices()
            .map(|(id, v)| VertexSnapshot {
                id,
                payload: v.payload(),
                incoming: v.incoming().collect(),
                outgoing: v.outgoing().collect(),
                markers: v.markers().iter().collect(),
            })
            .collect();

        let edges = graph
            .edges()
            .map(|(id, e)| EdgeSnapshot {
                id,
                source: e.source(),
                target: e.target(),
                markers: e.markers().iter().collect(),
            })
            .collect();

        let markers = graph
            .allocated_markers()
            .map(|id| MarkerSnapshot {
                id,
                members: graph.marker_members(id).collect(),
            })
            .collect();

        Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            vertices,
            edges,
            markers,
        }
    }

    /// Render as JSON.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
