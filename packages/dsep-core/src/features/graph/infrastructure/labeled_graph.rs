/*
 * Labeled Graph
 *
 * Vertex- and edge-labeled graph backing both the input network and the
 * pruned connection graph.
 *
 * - petgraph StableDiGraph: removing an edge never shifts other indices
 * - label -> index maps kept in BTreeMaps so listings are deterministic
 * - one directionality for every edge of the graph
 */

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use petgraph::Direction;

use crate::errors::{DsepError, Result};
use crate::shared::models::{Directionality, EdgeKey, NetworkType, VertexLabel};

/// Labeled graph with uniformly directed or undirected edges
///
/// Edges are stored in petgraph's directed representation in their
/// `source -> target` order. For undirected graphs the order never affects
/// neighbors or successors; it survives only in the key and in
/// [`has_directed_edge`](Self::has_directed_edge).
#[derive(Debug, Clone)]
pub struct LabeledGraph {
    graph: StableDiGraph<VertexLabel, EdgeKey>,
    vertex_map: BTreeMap<VertexLabel, NodeIndex>,
    edge_map: BTreeMap<EdgeKey, EdgeIndex>,
    directionality: Directionality,
}

impl LabeledGraph {
    /// Create an empty graph
    pub fn new(directionality: Directionality) -> Self {
        Self {
            graph: StableDiGraph::new(),
            vertex_map: BTreeMap::new(),
            edge_map: BTreeMap::new(),
            directionality,
        }
    }

    /// Create an empty graph with the directionality fixed by `network_type`
    pub fn for_network(network_type: NetworkType) -> Self {
        Self::new(network_type.directionality())
    }

    pub fn directionality(&self) -> Directionality {
        self.directionality
    }

    pub fn is_directed(&self) -> bool {
        self.directionality.is_directed()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Construction
    // ═══════════════════════════════════════════════════════════════════════

    /// Add a vertex from its raw label
    ///
    /// Fails if `raw` is not exactly one character or is already present.
    pub fn add_vertex(&mut self, raw: &str) -> Result<VertexLabel> {
        let label = VertexLabel::parse(raw)?;
        self.add_vertex_label(label)?;
        Ok(label)
    }

    /// Add an already validated vertex label
    pub fn add_vertex_label(&mut self, label: VertexLabel) -> Result<()> {
        if self.vertex_map.contains_key(&label) {
            return Err(DsepError::DuplicateVertex(label.to_string()));
        }
        let idx = self.graph.add_node(label);
        self.vertex_map.insert(label, idx);
        Ok(())
    }

    /// Add the edge `source-target`
    ///
    /// Both endpoints must already exist and the key must be new.
    pub fn add_edge(&mut self, source: VertexLabel, target: VertexLabel) -> Result<EdgeKey> {
        let key = EdgeKey::new(source, target);
        let from = self.node_index(source, &key)?;
        let to = self.node_index(target, &key)?;
        if self.edge_map.contains_key(&key) {
            return Err(DsepError::DuplicateEdge(key.to_string()));
        }
        let idx = self.graph.add_edge(from, to, key);
        self.edge_map.insert(key, idx);
        Ok(key)
    }

    /// Add an edge from raw endpoint labels
    pub fn add_edge_str(&mut self, source: &str, target: &str) -> Result<EdgeKey> {
        self.add_edge(VertexLabel::parse(source)?, VertexLabel::parse(target)?)
    }

    /// Remove an edge by key
    ///
    /// Removing an absent key is a no-op; returns whether an edge was removed.
    pub fn remove_edge(&mut self, key: &EdgeKey) -> bool {
        match self.edge_map.remove(key) {
            Some(idx) => self.graph.remove_edge(idx).is_some(),
            None => false,
        }
    }

    fn node_index(&self, label: VertexLabel, key: &EdgeKey) -> Result<NodeIndex> {
        self.vertex_map
            .get(&label)
            .copied()
            .ok_or_else(|| DsepError::unknown_vertex(label, format!("edge '{key}'")))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Listing
    // ═══════════════════════════════════════════════════════════════════════

    /// Vertices in label order
    pub fn vertices(&self) -> impl Iterator<Item = VertexLabel> + '_ {
        self.vertex_map.keys().copied()
    }

    /// Edge keys in key order
    pub fn edges(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        self.edge_map.keys().copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_map.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_map.len()
    }

    pub fn contains_vertex(&self, label: VertexLabel) -> bool {
        self.vertex_map.contains_key(&label)
    }

    pub fn contains_edge(&self, key: &EdgeKey) -> bool {
        self.edge_map.contains_key(key)
    }

    /// Endpoints of an edge in `(source, target)` order
    pub fn endpoints(&self, key: &EdgeKey) -> Option<(VertexLabel, VertexLabel)> {
        let idx = *self.edge_map.get(key)?;
        let (from, to) = self.graph.edge_endpoints(idx)?;
        Some((self.graph[from], self.graph[to]))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Adjacency
    // ═══════════════════════════════════════════════════════════════════════

    /// All vertices joined to `vertex` by any incident edge, direction ignored
    pub fn neighbors(&self, vertex: VertexLabel) -> Vec<VertexLabel> {
        let Some(&idx) = self.vertex_map.get(&vertex) else {
            return Vec::new();
        };
        self.graph
            .neighbors_undirected(idx)
            .map(|n| self.graph[n])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Targets of the outgoing edges of `vertex`
    ///
    /// For undirected graphs this is the same as [`neighbors`](Self::neighbors).
    pub fn successors(&self, vertex: VertexLabel) -> Vec<VertexLabel> {
        if !self.is_directed() {
            return self.neighbors(vertex);
        }
        let Some(&idx) = self.vertex_map.get(&vertex) else {
            return Vec::new();
        };
        self.graph
            .neighbors_directed(idx, Direction::Outgoing)
            .map(|n| self.graph[n])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Edges whose target is `vertex`
    ///
    /// For undirected graphs every incident edge counts as incoming.
    pub fn incoming_edges(&self, vertex: VertexLabel) -> Vec<EdgeKey> {
        let Some(&idx) = self.vertex_map.get(&vertex) else {
            return Vec::new();
        };
        let mut keys: BTreeSet<EdgeKey> = self
            .graph
            .edges_directed(idx, Direction::Incoming)
            .map(|e| *e.weight())
            .collect();
        if !self.is_directed() {
            keys.extend(
                self.graph
                    .edges_directed(idx, Direction::Outgoing)
                    .map(|e| *e.weight()),
            );
        }
        keys.into_iter().collect()
    }

    /// Whether the edge keyed `from-to` exists
    ///
    /// Undirected edges keep the orientation they were declared with: in a
    /// Markov network holding `A-B`, `A` leads into `B` but not the reverse.
    pub fn has_directed_edge(&self, from: VertexLabel, to: VertexLabel) -> bool {
        self.edge_map.contains_key(&EdgeKey::new(from, to))
    }

    /// Copy of every vertex and edge key with all edges undirected
    pub fn to_undirected_copy(&self) -> LabeledGraph {
        let mut copy = LabeledGraph::new(Directionality::Undirected);
        for label in self.vertices() {
            let idx = copy.graph.add_node(label);
            copy.vertex_map.insert(label, idx);
        }
        for key in self.edges() {
            let from = copy.vertex_map[&key.source];
            let to = copy.vertex_map[&key.target];
            let idx = copy.graph.add_edge(from, to, key);
            copy.edge_map.insert(key, idx);
        }
        copy
    }
}

impl PartialEq for LabeledGraph {
    fn eq(&self, other: &Self) -> bool {
        self.directionality == other.directionality
            && self.vertex_map.keys().eq(other.vertex_map.keys())
            && self.edge_map.keys().eq(other.edge_map.keys())
    }
}

impl Eq for LabeledGraph {}

/// `Vertices:A,B,C` / `Edges:A-B[A,B] B-C[B,C]`
impl fmt::Display for LabeledGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertices: Vec<String> = self.vertices().map(|v| v.to_string()).collect();
        writeln!(f, "Vertices:{}", vertices.join(","))?;
        write!(f, "Edges:")?;
        for key in self.edges() {
            write!(f, "{key}[{},{}] ", key.source, key.target)?;
        }
        Ok(())
    }
}
