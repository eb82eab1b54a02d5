//! Nested text dump of a graph.
//!
//! Layout, one nesting level per 4 spaces:
//!
//! ```text
//! Graph:
//!     vertexes_num = 2
//!     edges_num = 1
//!     vertexes:
//!         Vertex:
//!             data = 1
//!             input:EMPTY
//!             output:
//!                 Edge:
//!                     src = vertex(1)
//!                     dst = vertex(2)
//!                     markers: None
//!             markers: 0
//!         ...
//!     markers:
//!         Marker:
//!             id: 0
//!             allocated: TRUE
//!             marked:
//!                 vertex(1)
//! ```

use std::fmt;

use crate::graph::{EntityRef, Graph};
use crate::marker::{Marked, MarkerSlots};
use crate::types::{EdgeId, MarkerId, VertexId};

const STEP: usize = 4;

/// Display adapter for a whole graph.
pub struct GraphDump<'a> {
    graph: &'a Graph,
    indent: usize,
}

/// Display adapter for one vertex with its incident edges.
pub struct VertexDump<'a> {
    graph: &'a Graph,
    id: VertexId,
    indent: usize,
}

/// Display adapter for one edge.
pub struct EdgeDump<'a> {
    graph: &'a Graph,
    id: EdgeId,
    indent: usize,
}

/// Display adapter for one marker descriptor and its members.
pub struct MarkerDump<'a> {
    graph: &'a Graph,
    id: MarkerId,
    indent: usize,
}

impl<'a> GraphDump<'a> {
    /// Dump `graph` starting at `indent` spaces.
    pub fn new(graph: &'a Graph, indent: usize) -> Self {
        Self { graph, indent }
    }
}

impl<'a> VertexDump<'a> {
    /// Dump vertex `id` of `graph` starting at `indent` spaces.
    pub fn new(graph: &'a Graph, id: VertexId, indent: usize) -> Self {
        Self { graph, id, indent }
    }
}

impl<'a> EdgeDump<'a> {
    /// Dump edge `id` of `graph` starting at `indent` spaces.
    pub fn new(graph: &'a Graph, id: EdgeId, indent: usize) -> Self {
        Self { graph, id, indent }
    }
}

impl<'a> MarkerDump<'a> {
    /// Dump marker `id` of `graph` starting at `indent` spaces.
    pub fn new(graph: &'a Graph, id: MarkerId, indent: usize) -> Self {
        Self { graph, id, indent }
    }
}

impl fmt::Display for GraphDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (i, graph) = (self.indent, self.graph);
        writeln!(f, "{:i$}Graph:", "")?;
        writeln!(f, "{:w$}vertexes_num = {}", "", graph.vertex_count(), w = i + STEP)?;
        writeln!(f, "{:w$}edges_num = {}", "", graph.edge_count(), w = i + STEP)?;

        let empty = if graph.vertex_count() == 0 { "EMPTY" } else { "" };
        writeln!(f, "{:w$}vertexes:{}", "", empty, w = i + STEP)?;
        for (id, _) in graph.vertices() {
            write!(f, "{}", VertexDump::new(graph, id, i + 2 * STEP))?;
        }

        write!(f, "{:w$}markers: ", "", w = i + STEP)?;
        let mut allocated = graph.allocated_markers().peekable();
        if allocated.peek().is_none() {
            return writeln!(f, "None");
        }
        writeln!(f)?;
        for id in allocated {
            write!(f, "{}", MarkerDump::new(graph, id, i + 2 * STEP))?;
        }
        Ok(())
    }
}

impl fmt::Display for VertexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(vertex) = self.graph.vertex(self.id) else {
            return Ok(());
        };
        let i = self.indent;
        writeln!(f, "{:i$}Vertex:", "")?;
        writeln!(f, "{:w$}data = {}", "", vertex.payload(), w = i + STEP)?;

        let empty = if vertex.in_degree() == 0 { "EMPTY" } else { "" };
        writeln!(f, "{:w$}input:{}", "", empty, w = i + STEP)?;
        for edge in vertex.incoming() {
            write!(f, "{}", EdgeDump::new(self.graph, edge, i + 2 * STEP))?;
        }

        let empty = if vertex.out_degree() == 0 { "EMPTY" } else { "" };
        writeln!(f, "{:w$}output:{}", "", empty, w = i + STEP)?;
        for edge in vertex.outgoing() {
            write!(f, "{}", EdgeDump::new(self.graph, edge, i + 2 * STEP))?;
        }

        write_local_markers(f, vertex.markers(), i + STEP)
    }
}

impl fmt::Display for EdgeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(edge) = self.graph.edge(self.id) else {
            return Ok(());
        };
        let i = self.indent;
        writeln!(f, "{:i$}Edge:", "")?;
        writeln!(f, "{:w$}src = vertex({})", "", payload(self.graph, edge.source()), w = i + STEP)?;
        writeln!(f, "{:w$}dst = vertex({})", "", payload(self.graph, edge.target()), w = i + STEP)?;
        write_local_markers(f, edge.markers(), i + STEP)
    }
}

impl fmt::Display for MarkerDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let i = self.indent;
        let descriptor = self.graph.marker(self.id);
        writeln!(f, "{:i$}Marker:", "")?;
        writeln!(f, "{:w$}id: {}", "", self.id, w = i + STEP)?;
        let allocated = if descriptor.is_allocated() { "TRUE" } else { "FALSE" };
        writeln!(f, "{:w$}allocated: {}", "", allocated, w = i + STEP)?;

        let empty = if descriptor.is_empty() { "EMPTY" } else { "" };
        write!(f, "{:w$}marked: {}", "", empty, w = i + STEP)?;
        for element in self.graph.marker_members(self.id) {
            write!(f, "\n{:w$}", "", w = i + 2 * STEP)?;
            match self.graph.resolve(element.owner) {
                Some(EntityRef::Vertex(_, vertex)) => write!(f, "vertex({})", vertex.payload())?,
                Some(EntityRef::Edge(_, edge)) => write!(
                    f,
                    "edge({}, {})",
                    payload(self.graph, edge.source()),
                    payload(self.graph, edge.target())
                )?,
                None => write!(f, "{}", element.owner)?,
            }
            write!(f, " ")?;
        }
        writeln!(f)
    }
}

fn write_local_markers(f: &mut fmt::Formatter<'_>, slots: &MarkerSlots, indent: usize) -> fmt::Result {
    write!(f, "{:indent$}markers: ", "")?;
    for id in slots.iter() {
        write!(f, "{} ", id)?;
    }
    writeln!(f, "{}", if slots.is_empty() { "None" } else { "" })
}

fn payload(graph: &Graph, id: VertexId) -> String {
    graph
        .vertex(id)
        .map(|v| v.payload().to_string())
        .unwrap_or_else(|| id.to_string())
}

/// Render the whole graph.
pub fn render_graph(graph: &Graph) -> String {
    GraphDump::new(graph, 0).to_string()
}

/// Render one vertex with its incident edges.
pub fn render_vertex(graph: &Graph, id: VertexId) -> String {
    VertexDump::new(graph, id, 0).to_string()
}

/// Render one edge.
pub fn render_edge(graph: &Graph, id: EdgeId) -> String {
    EdgeDump::new(graph, id, 0).to_string()
}

/// Render one marker and its members.
pub fn render_marker(graph: &Graph, id: MarkerId) -> String {
    MarkerDump::new(graph, id, 0).to_string()
}
