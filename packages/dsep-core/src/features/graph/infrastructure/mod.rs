//! Graph infrastructure (petgraph-backed storage)

pub mod labeled_graph;

pub use labeled_graph::LabeledGraph;
