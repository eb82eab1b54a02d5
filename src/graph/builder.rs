//! Fluent API for building Graph instances.

use crate::types::{GraphError, GraphResult};

use super::Graph;

/// Fluent builder for constructing a Graph from vertex payloads.
///
/// Links name their endpoints by payload; when several vertices share a
/// payload, the first one added wins.
pub struct GraphBuilder {
    payloads: Vec<u32>,
    links: Vec<(u32, u32)>,
}

impl GraphBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            payloads: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Add a vertex.
    pub fn vertex(&mut self, payload: u32) -> &mut Self {
        self.payloads.push(payload);
        self
    }

    /// Add several vertices.
    pub fn vertices(&mut self, payloads: &[u32]) -> &mut Self {
        self.payloads.extend_from_slice(payloads);
        self
    }

    /// Add an edge between the vertices carrying `source` and `target`.
    pub fn link(&mut self, source: u32, target: u32) -> &mut Self {
        self.links.push((source, target));
        self
    }

    /// Build the final Graph.
    pub fn build(&self) -> GraphResult<Graph> {
        let mut graph = Graph::new();
        for &payload in &self.payloads {
            graph.add_vertex(payload);
        }
        for &(source, target) in &self.links {
            let src = graph.find_vertex(source).ok_or_else(|| missing(source))?;
            let dst = graph.find_vertex(target).ok_or_else(|| missing(target))?;
            graph.add_edge(src, dst)?;
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn missing(payload: u32) -> GraphError {
    GraphError::InvalidArgument(format!("no vertex with payload {}", payload))
}
