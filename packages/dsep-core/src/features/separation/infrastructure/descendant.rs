//! Evidence-descendant checks
//!
//! `has_evidence_descendant` looks one hop down only. The textbook criterion
//! needs the whole descendant set; that variant is
//! `has_evidence_descendant_transitive` and is opt-in through
//! `DescendantScope::Transitive`.

use std::collections::{BTreeSet, VecDeque};

use crate::features::graph::LabeledGraph;
use crate::shared::models::VertexLabel;

/// Whether a direct successor of `vertex` is evidence
pub fn has_evidence_descendant(
    graph: &LabeledGraph,
    evidence: &BTreeSet<VertexLabel>,
    vertex: VertexLabel,
) -> bool {
    graph
        .successors(vertex)
        .into_iter()
        .any(|s| evidence.contains(&s))
}

/// Whether any vertex reachable from `vertex` via outgoing edges is evidence
///
/// `vertex` itself only counts when a cycle leads back to it.
pub fn has_evidence_descendant_transitive(
    graph: &LabeledGraph,
    evidence: &BTreeSet<VertexLabel>,
    vertex: VertexLabel,
) -> bool {
    let mut visited = BTreeSet::new();
    let mut queue: VecDeque<VertexLabel> = graph.successors(vertex).into_iter().collect();

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        if evidence.contains(&current) {
            return true;
        }
        queue.extend(
            graph
                .successors(current)
                .into_iter()
                .filter(|s| !visited.contains(s)),
        );
    }
    false
}
