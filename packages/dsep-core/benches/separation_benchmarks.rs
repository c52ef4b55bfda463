//! Performance benchmarks for d-separation
//!
//! Path enumeration dominates: the number of simple paths grows
//! factorially with density, so the layered graphs below stay small.

use std::collections::BTreeSet;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dsep_core::{
    enumerate_paths, DSeparationAnalyzer, LabeledGraph, Network, NetworkType, VertexLabel,
};

// ============================================================================
// Fixtures
// ============================================================================

fn label(i: usize) -> VertexLabel {
    VertexLabel::from(char::from(b'A' + i as u8))
}

/// `layers` layers of `width` vertices, every vertex feeding every vertex
/// of the next layer, plus a single source and sink
fn layered(layers: usize, width: usize) -> (LabeledGraph, VertexLabel, VertexLabel) {
    let mut graph = LabeledGraph::for_network(NetworkType::Bayesian);
    let count = layers * width + 2;
    for i in 0..count {
        graph.add_vertex_label(label(i)).unwrap();
    }

    let source = label(0);
    let sink = label(count - 1);
    let at = |layer: usize, slot: usize| label(1 + layer * width + slot);

    for slot in 0..width {
        graph.add_edge(source, at(0, slot)).unwrap();
        graph.add_edge(at(layers - 1, slot), sink).unwrap();
    }
    for layer in 0..layers - 1 {
        for from in 0..width {
            for to in 0..width {
                graph.add_edge(at(layer, from), at(layer + 1, to)).unwrap();
            }
        }
    }
    (graph, source, sink)
}

fn layered_network(layers: usize, width: usize) -> Network {
    let (graph, x, y) = layered(layers, width);
    // Observe the first slot of every layer
    let evidence: BTreeSet<VertexLabel> = (0..layers).map(|l| label(1 + l * width)).collect();
    Network::new(NetworkType::Bayesian, graph, x, y, evidence).unwrap()
}

// ============================================================================
// Path Enumeration
// ============================================================================

fn bench_enumerate_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_paths");

    for (layers, width) in [(2, 2), (3, 2), (3, 3)] {
        let (graph, x, y) = layered(layers, width);
        let paths = enumerate_paths(&graph, x, y).len();
        group.throughput(Throughput::Elements(paths as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{layers}x{width}")),
            &graph,
            |b, graph| {
                b.iter(|| black_box(enumerate_paths(graph, x, y)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Full Analysis
// ============================================================================

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let sequential = DSeparationAnalyzer::new();

    for (layers, width) in [(2, 2), (3, 2), (3, 3)] {
        let network = layered_network(layers, width);
        group.bench_with_input(
            BenchmarkId::new("sequential", format!("{layers}x{width}")),
            &network,
            |b, network| {
                b.iter(|| black_box(sequential.analyze(network)));
            },
        );
    }

    group.finish();
}

#[cfg(feature = "parallel")]
fn bench_analyze_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_parallel");
    let config = dsep_core::AnalysisConfig::default().parallel(true);
    let parallel = DSeparationAnalyzer::with_config(config).expect("default config is valid");

    for (layers, width) in [(3, 2), (3, 3)] {
        let network = layered_network(layers, width);
        group.bench_with_input(
            BenchmarkId::new("parallel", format!("{layers}x{width}")),
            &network,
            |b, network| {
                b.iter(|| black_box(parallel.analyze(network)));
            },
        );
    }

    group.finish();
}

#[cfg(not(feature = "parallel"))]
fn bench_analyze_parallel(_c: &mut Criterion) {}

criterion_group!(
    benches,
    bench_enumerate_paths,
    bench_analyze,
    bench_analyze_parallel
);
criterion_main!(benches);
