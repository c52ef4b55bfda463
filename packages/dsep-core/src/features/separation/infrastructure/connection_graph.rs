/*
 * Connection Graph Builder
 *
 * Derives the pruned graph in which only edges that can still carry
 * dependence between x and y remain.
 *
 * - decisions read the ORIGINAL graph only, so each path is decided
 *   independently of every other path
 * - decisions are collected into a RemovalPlan, then a single writer
 *   applies the plan to an undirected copy
 * - with `parallel`, per-path decisions run on the rayon pool
 */

use std::collections::BTreeSet;

use tracing::debug;

use crate::config::AnalysisConfig;
use crate::features::graph::LabeledGraph;
use crate::features::path_enumeration::{enumerate_paths, Path};
use crate::features::separation::domain::{ConnectionGraph, RemovalPlan};
use crate::features::separation::infrastructure::collider::is_collider;
use crate::features::separation::ports::DescendantCheck;
use crate::shared::models::{EdgeKey, VertexLabel};

/// Connection graph plus the bookkeeping that produced it
#[derive(Debug, Clone)]
pub struct PrunedGraph {
    pub connection_graph: ConnectionGraph,
    /// x–y paths of the original graph
    pub examined_paths: Vec<Path>,
    /// Every key requested for removal, present in the copy or not
    pub plan: RemovalPlan,
    /// Keys that were present and got removed
    pub removed_edges: Vec<EdgeKey>,
}

/// Builds connection graphs under a given [`AnalysisConfig`]
#[derive(Debug, Clone, Default)]
pub struct ConnectionGraphBuilder {
    config: AnalysisConfig,
}

impl ConnectionGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Connection graph for the query `x ⊥ y | evidence`
    pub fn build(
        &self,
        graph: &LabeledGraph,
        x: VertexLabel,
        y: VertexLabel,
        evidence: &BTreeSet<VertexLabel>,
    ) -> ConnectionGraph {
        self.prune(graph, x, y, evidence).connection_graph
    }

    /// Like [`build`](Self::build), keeping the examined paths and the plan
    pub fn prune(
        &self,
        graph: &LabeledGraph,
        x: VertexLabel,
        y: VertexLabel,
        evidence: &BTreeSet<VertexLabel>,
    ) -> PrunedGraph {
        let examined_paths = enumerate_paths(graph, x, y);
        let plan = self.plan(graph, &examined_paths, evidence);

        let mut connection_graph = graph.to_undirected_copy();
        let removed_edges = apply_plan(&mut connection_graph, &plan);

        debug!(
            x = %x,
            y = %y,
            paths = examined_paths.len(),
            requested = plan.len(),
            removed = removed_edges.len(),
            "connection graph pruned"
        );

        PrunedGraph {
            connection_graph,
            examined_paths,
            plan,
            removed_edges,
        }
    }

    /// Union of the per-path decisions for `paths`
    ///
    /// The result does not depend on the order of `paths`.
    pub fn plan(
        &self,
        graph: &LabeledGraph,
        paths: &[Path],
        evidence: &BTreeSet<VertexLabel>,
    ) -> RemovalPlan {
        #[cfg(feature = "parallel")]
        if self.config.runs_parallel() {
            use rayon::prelude::*;

            return paths
                .par_iter()
                .map(|path| self.plan_path(graph, path, evidence))
                .reduce(RemovalPlan::new, RemovalPlan::merge);
        }

        paths
            .iter()
            .map(|path| self.plan_path(graph, path, evidence))
            .fold(RemovalPlan::new(), RemovalPlan::merge)
    }

    /// Edges cut by the blocked interior vertices of one path
    ///
    /// - collider, not evidence, no evidence below: cut `left-v` and `right-v`
    /// - collider otherwise: activated, nothing cut
    /// - non-collider in evidence: cut both orientations of both path edges
    /// - non-collider not in evidence: nothing cut
    pub fn plan_path(
        &self,
        graph: &LabeledGraph,
        path: &Path,
        evidence: &BTreeSet<VertexLabel>,
    ) -> RemovalPlan {
        let mut plan = RemovalPlan::new();

        for (left, vertex, right) in path.interior() {
            let observed = evidence.contains(&vertex);
            if is_collider(graph, path, vertex) {
                if !observed
                    && !self
                        .config
                        .descendant_scope
                        .has_evidence_below(graph, evidence, vertex)
                {
                    debug!(path = %path, vertex = %vertex, "unobserved collider blocks path");
                    plan.request(left, vertex);
                    plan.request(right, vertex);
                }
            } else if observed {
                debug!(path = %path, vertex = %vertex, "observed non-collider blocks path");
                plan.request_both(left, vertex);
                plan.request_both(right, vertex);
            }
        }

        plan
    }
}

/// Remove every planned key from `connection_graph`
///
/// Absent keys are skipped. Returns the keys that were actually removed.
pub fn apply_plan(connection_graph: &mut ConnectionGraph, plan: &RemovalPlan) -> Vec<EdgeKey> {
    let mut removed = Vec::new();
    for key in plan.keys() {
        if connection_graph.remove_edge(key) {
            removed.push(*key);
        }
    }
    removed
}

/// Connection graph for `x ⊥ y | evidence` under the default configuration
pub fn build_connection_graph(
    graph: &LabeledGraph,
    x: VertexLabel,
    y: VertexLabel,
    evidence: &BTreeSet<VertexLabel>,
) -> ConnectionGraph {
    ConnectionGraphBuilder::new().build(graph, x, y, evidence)
}
