//! Presentation of a graph: nested text dump and JSON snapshot.

pub mod snapshot;
pub mod text;

pub use snapshot::{EdgeSnapshot, GraphSnapshot, MarkerSnapshot, VertexSnapshot};
pub use text::{
    render_edge, render_graph, render_marker, render_vertex, EdgeDump, GraphDump, MarkerDump,
    VertexDump,
};
