//! End-to-end tests: the sample graph walkthrough, text dump, CLI commands.

use marker_graph::cli::commands::{
    build_report, demo_graph, demo_report, parse_edge, parse_payloads,
};
use marker_graph::dump::{render_edge, render_graph, render_marker, render_vertex, GraphSnapshot};
use marker_graph::{Entity, Graph, GraphBuilder, GraphError};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ==================== Sample graph ====================

#[test]
fn test_redirect_then_remove_in_sample_graph() {
    init_logger();
    let mut graph = demo_graph().unwrap();
    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.edge_count(), 5);

    let v1 = graph.find_vertex(1).unwrap();
    let v6 = graph.find_vertex(6).unwrap();
    let e16 = graph.find_edge(v1, v6).unwrap();

    graph.redirect_edge(e16, None, Some(v1)).unwrap();

    let edge = graph.edge(e16).unwrap();
    assert_eq!((edge.source(), edge.target()), (v1, v1));
    assert!(!graph.incoming(v6).any(|e| e == e16));
    assert!(graph.incoming(v1).any(|e| e == e16));
    assert!(graph.outgoing(v1).any(|e| e == e16));

    graph.remove_edge(e16);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.vertex_count(), 5);
    assert!(!graph.incoming(v1).any(|e| e == e16));
    assert!(!graph.outgoing(v1).any(|e| e == e16));
}

#[test]
fn test_marker_walkthrough_in_sample_graph() {
    init_logger();
    let mut graph = demo_graph().unwrap();
    let v1 = graph.find_vertex(1).unwrap();
    let v5 = graph.find_vertex(5).unwrap();
    let v6 = graph.find_vertex(6).unwrap();
    let v8 = graph.find_vertex(8).unwrap();
    let e18 = graph.find_edge(v1, v8).unwrap();
    let e56 = graph.find_edge(v5, v6).unwrap();

    let l0 = graph.allocate_marker().unwrap();
    let l1 = graph.allocate_marker().unwrap();
    for entity in [Entity::Vertex(v1), Entity::Vertex(v5), Entity::Edge(e18), Entity::Edge(e56)] {
        graph.set_marker(entity, l0).unwrap();
        graph.set_marker(entity, l1).unwrap();
    }

    graph.unset_marker(v1, l0);
    graph.unset_marker(e56, l1);

    assert!(!graph.check_marker(v1, l0));
    assert!(graph.check_marker(v5, l0));
    assert!(graph.check_marker(v1, l1));
    assert!(graph.check_marker(v5, l1));
    assert!(graph.check_marker(e18, l0));
    assert!(graph.check_marker(e56, l0));
    assert!(graph.check_marker(e18, l1));
    assert!(!graph.check_marker(e56, l1));

    let l1_members: Vec<Entity> = graph.marker_members(l1).map(|m| m.owner).collect();
    assert_eq!(
        l1_members,
        vec![Entity::Vertex(v1), Entity::Vertex(v5), Entity::Edge(e18)]
    );

    assert_eq!(graph.free_marker(l1), 3);
    assert!(!graph.check_marker(v1, l1));
    assert!(!graph.check_marker(v5, l1));
    assert!(!graph.check_marker(e18, l1));
    assert!(graph.check_marker(v5, l0));
    assert!(graph.check_marker(e18, l0));
    assert!(graph.check_marker(e56, l0));

    graph.destroy();
}

// ==================== Text dump ====================

#[test]
fn test_render_graph_layout() {
    let mut graph = GraphBuilder::new().vertices(&[1, 2]).link(1, 2).build().unwrap();
    let v1 = graph.find_vertex(1).unwrap();
    let m = graph.allocate_marker().unwrap();
    graph.set_marker(v1, m).unwrap();

    let expected = concat!(
        "Graph:\n",
        "    vertexes_num = 2\n",
        "    edges_num = 1\n",
        "    vertexes:\n",
        "        Vertex:\n",
        "            data = 1\n",
        "            input:EMPTY\n",
        "            output:\n",
        "                Edge:\n",
        "                    src = vertex(1)\n",
        "                    dst = vertex(2)\n",
        "                    markers: None\n",
        "            markers: 0 \n",
        "        Vertex:\n",
        "            data = 2\n",
        "            input:\n",
        "                Edge:\n",
        "                    src = vertex(1)\n",
        "                    dst = vertex(2)\n",
        "                    markers: None\n",
        "            output:EMPTY\n",
        "            markers: None\n",
        "    markers: \n",
        "        Marker:\n",
        "            id: 0\n",
        "            allocated: TRUE\n",
        "            marked: \n",
        "                vertex(1) \n",
    );
    assert_eq!(render_graph(&graph), expected);
}

#[test]
fn test_render_empty_graph() {
    let graph = Graph::new();
    let expected = concat!(
        "Graph:\n",
        "    vertexes_num = 0\n",
        "    edges_num = 0\n",
        "    vertexes:EMPTY\n",
        "    markers: None\n",
    );
    assert_eq!(render_graph(&graph), expected);
}

#[test]
fn test_render_marker_with_edge_member() {
    let mut graph = GraphBuilder::new().vertices(&[1, 8]).link(1, 8).build().unwrap();
    let v1 = graph.find_vertex(1).unwrap();
    let v8 = graph.find_vertex(8).unwrap();
    let e = graph.find_edge(v1, v8).unwrap();
    let m = graph.allocate_marker().unwrap();
    let empty = graph.allocate_marker().unwrap();
    graph.set_marker(e, m).unwrap();
    graph.set_marker(v8, m).unwrap();

    assert_eq!(
        render_marker(&graph, m),
        "Marker:\n    id: 0\n    allocated: TRUE\n    marked: \n        edge(1, 8) \n        vertex(8) \n"
    );
    assert_eq!(
        render_marker(&graph, empty),
        "Marker:\n    id: 1\n    allocated: TRUE\n    marked: EMPTY\n"
    );
    assert_eq!(
        render_edge(&graph, e),
        "Edge:\n    src = vertex(1)\n    dst = vertex(8)\n    markers: 0 \n"
    );
    assert!(render_vertex(&graph, v8).starts_with("Vertex:\n    data = 8\n    input:\n"));
}

#[test]
fn test_render_absent_entity_is_empty() {
    let mut graph = Graph::new();
    let v = graph.add_vertex(1);
    let e = graph.add_edge(v, v).unwrap();
    graph.remove_vertex(v);

    assert_eq!(render_vertex(&graph, v), "");
    assert_eq!(render_edge(&graph, e), "");
}

// ==================== Snapshot ====================

#[test]
fn test_snapshot_matches_graph() {
    let mut graph = demo_graph().unwrap();
    let v3 = graph.find_vertex(3).unwrap();
    let m = graph.allocate_marker().unwrap();
    graph.set_marker(v3, m).unwrap();

    let snapshot = GraphSnapshot::capture(&graph);
    assert_eq!(snapshot.vertex_count, 5);
    assert_eq!(snapshot.edge_count, 5);
    assert_eq!(snapshot.vertices.len(), 5);
    assert_eq!(snapshot.edges.len(), 5);
    assert_eq!(snapshot.markers.len(), 1);
    assert_eq!(snapshot.markers[0].members[0].owner, Entity::Vertex(v3));

    let json: serde_json::Value =
        serde_json::from_str(&snapshot.to_json(false).unwrap()).unwrap();
    assert_eq!(json["vertex_count"], 5);
    assert_eq!(json["markers"][0]["members"][0]["owner"]["kind"], "vertex");
    assert_eq!(json["vertices"][1]["payload"], 3);
    assert_eq!(json["vertices"][1]["markers"][0], 0);
}

// ==================== CLI commands ====================

#[test]
fn test_demo_report_text() {
    let out = demo_report(false).unwrap();
    assert!(out.starts_with("Graph after creation:\nGraph:\n    vertexes_num = 5\n    edges_num = 5\n"));
    assert!(out.contains("Graph after destruction:\nGraph:\n    vertexes_num = 5\n    edges_num = 4\n"));
    assert!(out.contains("Created marker with id = 0\n"));
    assert!(out.contains("Created marker with id = 1\n"));
    assert!(out.contains("Check vertex 1 set with marker 0: FALSE\n"));
    assert!(out.contains("Check vertex 5 set with marker 0: TRUE\n"));
    assert!(out.contains("Check edge (5, 6) set with marker 1: FALSE\n"));
    assert!(out.contains("Check edge (1, 8) set with marker 1: TRUE\n"));
    assert!(out.contains("Graph after free marker 1\n"));
}

#[test]
fn test_demo_report_json() {
    let out = demo_report(true).unwrap();
    let stages: serde_json::Value = serde_json::from_str(&out).unwrap();
    let stages = stages.as_array().unwrap();

    let last = stages.last().unwrap();
    assert_eq!(last["stage"], "Graph after free marker 1");
    assert_eq!(last["graph"]["edge_count"], 4);
    assert_eq!(last["graph"]["markers"].as_array().unwrap().len(), 1);

    let checks: Vec<bool> = stages
        .iter()
        .filter(|s| s.get("check").is_some())
        .map(|s| s["value"].as_bool().unwrap())
        .collect();
    assert_eq!(checks, vec![false, true, true, true, true, true, true, false]);
}

#[test]
fn test_build_report_with_marks() {
    let out = build_report(&[1, 2, 3], &[(1, 2), (2, 3)], &[vec![1, 3]], false).unwrap();
    assert!(out.contains("vertexes_num = 3\n"));
    assert!(out.contains("edges_num = 2\n"));
    assert!(out.contains("                vertex(1) \n                vertex(3) \n"));
}

#[test]
fn test_build_report_unknown_payload() {
    match build_report(&[1], &[(1, 2)], &[], false) {
        Err(GraphError::InvalidArgument(_)) => {}
        other => panic!("Expected InvalidArgument, got {:?}", other),
    }
}

#[test]
fn test_parse_arguments() {
    assert_eq!(parse_edge("3:1").unwrap(), (3, 1));
    assert_eq!(parse_edge(" 8 : 5 ").unwrap(), (8, 5));
    assert!(parse_edge("3-1").is_err());
    assert!(parse_edge("a:1").is_err());

    assert_eq!(parse_payloads("1,5, 6").unwrap(), vec![1, 5, 6]);
    assert!(parse_payloads("1,,2").is_err());
}
