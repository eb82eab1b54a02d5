//! Criterion benchmarks for marker-graph.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use marker_graph::{EdgeId, Graph, MarkerId, VertexId};

/// Build a graph with random edges through add_vertex/add_edge.
fn make_graph(vertex_count: usize, edges_per_vertex: usize) -> (Graph, Vec<VertexId>, Vec<EdgeId>) {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::new();
    let vertices: Vec<VertexId> = (0..vertex_count)
        .map(|i| graph.add_vertex(i as u32))
        .collect();

    let mut edges = Vec::with_capacity(vertex_count * edges_per_vertex);
    for &source in &vertices {
        for _ in 0..edges_per_vertex {
            let target = vertices[rng.gen_range(0..vertex_count)];
            edges.push(graph.add_edge(source, target).unwrap());
        }
    }

    (graph, vertices, edges)
}

fn bench_add_vertex(c: &mut Criterion) {
    let (mut graph, _, _) = make_graph(10_000, 3);

    c.bench_function("add_vertex_to_10k", |b| {
        b.iter(|| graph.add_vertex(999))
    });
}

fn bench_edge_churn(c: &mut Criterion) {
    let (mut graph, vertices, _) = make_graph(10_000, 3);
    let mut rng = rand::thread_rng();

    c.bench_function("add_remove_edge_10k", |b| {
        b.iter(|| {
            let source = vertices[rng.gen_range(0..vertices.len())];
            let target = vertices[rng.gen_range(0..vertices.len())];
            let edge = graph.add_edge(source, target).unwrap();
            graph.remove_edge(edge);
        })
    });
}

fn bench_remove_vertex(c: &mut Criterion) {
    c.bench_function("remove_vertex_cascade_1k", |b| {
        b.iter_batched(
            || make_graph(1_000, 4),
            |(mut graph, vertices, _)| {
                for v in vertices.into_iter().step_by(10) {
                    graph.remove_vertex(v);
                }
                graph
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

fn bench_redirect_edge(c: &mut Criterion) {
    let (mut graph, vertices, edges) = make_graph(10_000, 3);
    let mut rng = rand::thread_rng();

    c.bench_function("redirect_edge_10k", |b| {
        b.iter(|| {
            let edge = edges[rng.gen_range(0..edges.len())];
            let target = vertices[rng.gen_range(0..vertices.len())];
            graph.redirect_edge(edge, None, Some(target)).unwrap();
        })
    });
}

fn bench_set_unset_marker(c: &mut Criterion) {
    let (mut graph, vertices, edges) = make_graph(10_000, 3);
    let marker = graph.allocate_marker().unwrap();
    let mut rng = rand::thread_rng();

    c.bench_function("set_unset_marker_10k", |b| {
        b.iter(|| {
            let v = vertices[rng.gen_range(0..vertices.len())];
            let e = edges[rng.gen_range(0..edges.len())];
            graph.set_marker(v, marker).unwrap();
            graph.set_marker(e, marker).unwrap();
            let hit = graph.check_marker(v, marker);
            graph.unset_marker(v, marker);
            graph.unset_marker(e, marker);
            hit
        })
    });
}

fn bench_free_marker(c: &mut Criterion) {
    c.bench_function("free_marker_40k_members", |b| {
        b.iter_batched(
            || {
                let (mut graph, vertices, edges) = make_graph(10_000, 3);
                let marker = graph.allocate_marker().unwrap();
                for &v in &vertices {
                    graph.set_marker(v, marker).unwrap();
                }
                for &e in &edges {
                    graph.set_marker(e, marker).unwrap();
                }
                (graph, marker)
            },
            |(mut graph, marker): (Graph, MarkerId)| {
                graph.free_marker(marker);
                graph
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_add_vertex,
    bench_edge_churn,
    bench_remove_vertex,
    bench_redirect_edge,
    bench_set_unset_marker,
    bench_free_marker,
);
criterion_main!(benches);
