//! Common test utilities for dsep-core
//!
//! Builders for graphs and networks written as edge strings (`"A-B"`).

#![allow(dead_code)]

use std::collections::BTreeSet;

use dsep_core::{EdgeKey, LabeledGraph, Network, NetworkType, VertexLabel};

pub fn v(c: char) -> VertexLabel {
    VertexLabel::from(c)
}

pub fn evidence(labels: &str) -> BTreeSet<VertexLabel> {
    labels.chars().map(VertexLabel::from).collect()
}

/// Builder for networks
#[derive(Debug)]
pub struct NetworkBuilder {
    network_type: NetworkType,
    vertices: Vec<char>,
    edges: Vec<(char, char)>,
    evidence: Vec<char>,
}

impl NetworkBuilder {
    pub fn bayesian() -> Self {
        Self::new(NetworkType::Bayesian)
    }

    pub fn markov() -> Self {
        Self::new(NetworkType::Markov)
    }

    pub fn new(network_type: NetworkType) -> Self {
        Self {
            network_type,
            vertices: Vec::new(),
            edges: Vec::new(),
            evidence: Vec::new(),
        }
    }

    /// Add vertices, one per character
    pub fn with_vertices(mut self, labels: &str) -> Self {
        self.vertices.extend(labels.chars());
        self
    }

    /// Add edges written as `"A-B"`
    pub fn with_edges(mut self, edges: &[&str]) -> Self {
        for raw in edges {
            let key: EdgeKey = raw.parse().unwrap();
            self.edges.push((key.source.as_char(), key.target.as_char()));
        }
        self
    }

    pub fn with_evidence(mut self, labels: &str) -> Self {
        self.evidence.extend(labels.chars());
        self
    }

    pub fn graph(&self) -> LabeledGraph {
        let mut graph = LabeledGraph::for_network(self.network_type);
        for &c in &self.vertices {
            graph.add_vertex_label(v(c)).unwrap();
        }
        for &(s, t) in &self.edges {
            graph.add_edge(v(s), v(t)).unwrap();
        }
        graph
    }

    pub fn query(self, x: char, y: char) -> Network {
        let graph = self.graph();
        Network::new(
            self.network_type,
            graph,
            v(x),
            v(y),
            self.evidence.iter().copied().map(v),
        )
        .unwrap()
    }
}

/// A → B → C
pub fn chain() -> NetworkBuilder {
    NetworkBuilder::bayesian()
        .with_vertices("ABC")
        .with_edges(&["A-B", "B-C"])
}

/// A → B ← C
pub fn collider() -> NetworkBuilder {
    NetworkBuilder::bayesian()
        .with_vertices("ABC")
        .with_edges(&["A-B", "C-B"])
}

/// A - B - C
pub fn markov_chain() -> NetworkBuilder {
    NetworkBuilder::markov()
        .with_vertices("ABC")
        .with_edges(&["A-B", "B-C"])
}

/// A - B - C declared as `A-B`, `C-B`
pub fn markov_collider() -> NetworkBuilder {
    NetworkBuilder::markov()
        .with_vertices("ABC")
        .with_edges(&["A-B", "C-B"])
}

/// Sorted edge keys as strings
pub fn edge_strings(graph: &LabeledGraph) -> Vec<String> {
    graph.edges().map(|k| k.to_string()).collect()
}

/// Well-formed `.cgg` document for the chain A → B → C
pub const CHAIN_CGG: &str = r#"type: Bayesian
vertices:
  - name: "A"
  - name: "B"
  - name: "C"
edges:
  - v1: "A"
    v2: "B"
  - v1: "B"
    v2: "C"
x: "A"
y: "C"
evidence:
  - name: "B"
"#;
