//! Separation Ports - Interface Layer
//!
//! The evidence-below-a-collider test is the one policy point of the
//! pruning step; [`DescendantCheck`] abstracts it.

use std::collections::BTreeSet;

use crate::config::DescendantScope;
use crate::features::graph::LabeledGraph;
use crate::features::separation::infrastructure::descendant::{
    has_evidence_descendant, has_evidence_descendant_transitive,
};
use crate::shared::models::VertexLabel;

/// Decides whether evidence sits below a vertex
///
/// # Implementors
/// - `DescendantScope` (config): one-hop or transitive
pub trait DescendantCheck: Send + Sync {
    fn has_evidence_below(
        &self,
        graph: &LabeledGraph,
        evidence: &BTreeSet<VertexLabel>,
        vertex: VertexLabel,
    ) -> bool;
}

impl DescendantCheck for DescendantScope {
    fn has_evidence_below(
        &self,
        graph: &LabeledGraph,
        evidence: &BTreeSet<VertexLabel>,
        vertex: VertexLabel,
    ) -> bool {
        match self {
            DescendantScope::Direct => has_evidence_descendant(graph, evidence, vertex),
            DescendantScope::Transitive => {
                has_evidence_descendant_transitive(graph, evidence, vertex)
            }
        }
    }
}
