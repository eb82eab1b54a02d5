//! CLI command implementations.

use serde_json::Value;

use crate::dump::{render_edge, render_graph, render_marker, render_vertex, GraphSnapshot};
use crate::graph::{Graph, GraphBuilder};
use crate::types::{EdgeId, GraphError, GraphResult, MarkerId, VertexId};

/// Vertex payloads of the demonstration graph.
pub const DEMO_VERTICES: [u32; 5] = [1, 3, 5, 6, 8];

/// Edges of the demonstration graph, as (source payload, target payload).
pub const DEMO_EDGES: [(u32, u32); 5] = [(3, 1), (1, 6), (1, 8), (8, 5), (5, 6)];

/// Collects command output as text, or as a list of JSON stages.
struct Report {
    json: bool,
    text: String,
    stages: Vec<Value>,
}

impl Report {
    fn new(json: bool) -> Self {
        Self {
            json,
            text: String::new(),
            stages: Vec::new(),
        }
    }

    fn line(&mut self, message: impl Into<String>) {
        let message = message.into();
        if self.json {
            self.stages.push(serde_json::json!({ "event": message }));
        } else {
            self.text.push_str(&message);
            self.text.push('\n');
        }
    }

    fn show(&mut self, title: &str, rendered: String, graph: &Graph) {
        if self.json {
            let snapshot = GraphSnapshot::capture(graph);
            self.stages
                .push(serde_json::json!({ "stage": title, "graph": snapshot }));
        } else {
            self.text.push_str(title);
            self.text.push('\n');
            self.text.push_str(&rendered);
        }
    }

    fn check(&mut self, what: &str, value: bool) {
        if self.json {
            self.stages
                .push(serde_json::json!({ "check": what, "value": value }));
        } else {
            let shown = if value { "TRUE" } else { "FALSE" };
            self.text.push_str(&format!("Check {}: {}\n", what, shown));
        }
    }

    fn finish(self) -> GraphResult<String> {
        if self.json {
            Ok(serde_json::to_string_pretty(&self.stages)?)
        } else {
            Ok(self.text)
        }
    }
}

fn vertex_of(graph: &Graph, payload: u32) -> GraphResult<VertexId> {
    graph
        .find_vertex(payload)
        .ok_or_else(|| GraphError::InvalidArgument(format!("no vertex with payload {}", payload)))
}

fn edge_of(graph: &Graph, source: u32, target: u32) -> GraphResult<EdgeId> {
    let src = vertex_of(graph, source)?;
    let dst = vertex_of(graph, target)?;
    graph.find_edge(src, dst).ok_or_else(|| {
        GraphError::InvalidArgument(format!("no edge ({}, {})", source, target))
    })
}

/// Build the demonstration graph: vertices {1, 3, 5, 6, 8} and edges
/// 3→1, 1→6, 1→8, 8→5, 5→6.
pub fn demo_graph() -> GraphResult<Graph> {
    let mut builder = GraphBuilder::new();
    builder.vertices(&DEMO_VERTICES);
    for (source, target) in DEMO_EDGES {
        builder.link(source, target);
    }
    builder.build()
}

/// Run the full walkthrough and return its output.
///
/// Redirects 1→6 to 1→1 and removes it, allocates two markers, sets them
/// on vertices 1 and 5 and on edges (1, 8) and (5, 6), unsets marker 0
/// from vertex 1 and marker 1 from edge (5, 6), checks every combination,
/// then frees marker 1.
pub fn demo_report(json: bool) -> GraphResult<String> {
    let mut report = Report::new(json);
    let mut graph = demo_graph()?;
    report.show("Graph after creation:", render_graph(&graph), &graph);

    let v1 = vertex_of(&graph, 1)?;
    let v5 = vertex_of(&graph, 5)?;
    let e16 = edge_of(&graph, 1, 6)?;
    let e18 = edge_of(&graph, 1, 8)?;
    let e56 = edge_of(&graph, 5, 6)?;

    report.show("Redirect edge(1, 6) to edge(1, 1):", render_edge(&graph, e16), &graph);
    graph.redirect_edge(e16, None, Some(v1))?;
    report.show("Graph after redirection:", render_graph(&graph), &graph);

    report.show("Destroy edge(1, 1):", render_edge(&graph, e16), &graph);
    graph.remove_edge(e16);
    report.show("Graph after destruction:", render_graph(&graph), &graph);

    let m0 = graph.allocate_marker()?;
    report.show(
        &format!("Created marker with id = {}", m0),
        render_marker(&graph, m0),
        &graph,
    );
    let m1 = graph.allocate_marker()?;
    report.show(
        &format!("Created marker with id = {}", m1),
        render_marker(&graph, m1),
        &graph,
    );

    for marker in [m0, m1] {
        for (name, vertex) in [("1", v1), ("5", v5)] {
            report.line(format!("Set vertex {} with marker {}", name, marker));
            graph.set_marker(vertex, marker)?;
        }
    }
    for marker in [m0, m1] {
        for (name, edge) in [("(1, 8)", e18), ("(5, 6)", e56)] {
            report.line(format!("Set edge {} with marker {}", name, marker));
            graph.set_marker(edge, marker)?;
        }
    }
    show_entities(&mut report, &graph, "after set", [v1, v5], [e18, e56], [m0, m1]);

    report.line(format!("Unset vertex 1 with marker {}", m0));
    graph.unset_marker(v1, m0);
    report.line(format!("Unset edge (5, 6) with marker {}", m1));
    graph.unset_marker(e56, m1);
    show_entities(&mut report, &graph, "after unset", [v1, v5], [e18, e56], [m0, m1]);

    for marker in [m0, m1] {
        for (name, vertex) in [("1", v1), ("5", v5)] {
            let what = format!("vertex {} set with marker {}", name, marker);
            report.check(&what, graph.check_marker(vertex, marker));
        }
    }
    for marker in [m0, m1] {
        for (name, edge) in [("(1, 8)", e18), ("(5, 6)", e56)] {
            let what = format!("edge {} set with marker {}", name, marker);
            report.check(&what, graph.check_marker(edge, marker));
        }
    }

    report.line(format!("Free marker {}", m1));
    graph.free_marker(m1);
    report.show(
        &format!("Graph after free marker {}", m1),
        render_graph(&graph),
        &graph,
    );

    graph.destroy();
    report.finish()
}

fn show_entities(
    report: &mut Report,
    graph: &Graph,
    when: &str,
    vertices: [VertexId; 2],
    edges: [EdgeId; 2],
    markers: [MarkerId; 2],
) {
    let rendered: String = vertices.iter().map(|&v| render_vertex(graph, v)).collect();
    report.show(&format!("Vertexes {}:", when), rendered, graph);
    let rendered: String = edges.iter().map(|&e| render_edge(graph, e)).collect();
    report.show(&format!("Edges {}:", when), rendered, graph);
    let rendered: String = markers.iter().map(|&m| render_marker(graph, m)).collect();
    report.show(&format!("Markers {}:", when), rendered, graph);
    report.show(&format!("Graph {}:", when), render_graph(graph), graph);
}

/// Run the demonstration walkthrough.
pub fn cmd_demo(json: bool) -> GraphResult<()> {
    print!("{}", demo_report(json)?);
    if json {
        println!();
    }
    Ok(())
}

/// Parse an edge given as `SRC:DST` payloads.
pub fn parse_edge(arg: &str) -> GraphResult<(u32, u32)> {
    let invalid = || GraphError::InvalidArgument(format!("edge must be SRC:DST, got {:?}", arg));
    let (source, target) = arg.split_once(':').ok_or_else(invalid)?;
    let source = source.trim().parse().map_err(|_| invalid())?;
    let target = target.trim().parse().map_err(|_| invalid())?;
    Ok((source, target))
}

/// Parse a comma-separated payload list.
pub fn parse_payloads(arg: &str) -> GraphResult<Vec<u32>> {
    arg.split(',')
        .map(|t| {
            t.trim().parse().map_err(|_| {
                GraphError::InvalidArgument(format!("invalid payload {:?} in {:?}", t, arg))
            })
        })
        .collect()
}

/// Build a graph from payloads and edges, mark it, and return the dump.
///
/// Each entry of `marks` gets a freshly allocated marker, set on every
/// vertex whose payload it lists.
pub fn build_report(
    vertices: &[u32],
    edges: &[(u32, u32)],
    marks: &[Vec<u32>],
    json: bool,
) -> GraphResult<String> {
    let mut builder = GraphBuilder::new();
    builder.vertices(vertices);
    for &(source, target) in edges {
        builder.link(source, target);
    }
    let mut graph = builder.build()?;

    for group in marks {
        let marker = graph.allocate_marker()?;
        for &payload in group {
            let vertex = vertex_of(&graph, payload)?;
            graph.set_marker(vertex, marker)?;
        }
    }

    if json {
        Ok(GraphSnapshot::capture(&graph).to_json(true)?)
    } else {
        Ok(render_graph(&graph))
    }
}

/// Build a graph from the command line and dump it.
pub fn cmd_build(
    vertices: &[u32],
    edges: &[String],
    marks: &[String],
    json: bool,
) -> GraphResult<()> {
    let edges = edges
        .iter()
        .map(|e| parse_edge(e))
        .collect::<GraphResult<Vec<_>>>()?;
    let marks = marks
        .iter()
        .map(|m| parse_payloads(m))
        .collect::<GraphResult<Vec<_>>>()?;
    let output = build_report(vertices, &edges, &marks, json)?;
    print!("{}", output);
    if json {
        println!();
    }
    Ok(())
}
