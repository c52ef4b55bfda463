//! Separation domain models

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::features::graph::LabeledGraph;
use crate::features::path_enumeration::Path;
use crate::shared::models::{EdgeKey, VertexLabel};

/// Pruned undirected copy of the original graph
pub type ConnectionGraph = LabeledGraph;

/// Edge keys requested for removal from the connection graph
///
/// Requests are a set: asking twice for the same key, or asking for a key
/// the graph does not hold, changes nothing once applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemovalPlan {
    keys: BTreeSet<EdgeKey>,
}

impl RemovalPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, source: VertexLabel, target: VertexLabel) {
        self.keys.insert(EdgeKey::new(source, target));
    }

    /// Request both orientations of the `a`/`b` edge
    pub fn request_both(&mut self, a: VertexLabel, b: VertexLabel) {
        self.request(a, b);
        self.request(b, a);
    }

    /// Union of two plans
    pub fn merge(mut self, other: RemovalPlan) -> Self {
        self.keys.extend(other.keys);
        self
    }

    pub fn contains(&self, key: &EdgeKey) -> bool {
        self.keys.contains(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &EdgeKey> {
        self.keys.iter()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Extend<EdgeKey> for RemovalPlan {
    fn extend<T: IntoIterator<Item = EdgeKey>>(&mut self, iter: T) {
        self.keys.extend(iter);
    }
}

/// Outcome of one separation query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeparationReport {
    pub x: VertexLabel,
    pub y: VertexLabel,
    pub evidence: Vec<VertexLabel>,
    /// x and y are d-separated given the evidence
    pub separated: bool,
    pub connection_graph: ConnectionGraph,
    /// x–y paths of the original graph that drove the pruning
    pub examined_paths: Vec<Path>,
    /// Keys actually removed from the connection graph
    pub removed_edges: Vec<EdgeKey>,
    /// x–y paths still open in the connection graph
    pub residual_paths: Vec<Path>,
}

impl SeparationReport {
    /// "Yes" when separated, "No" otherwise
    pub fn verdict_label(&self) -> &'static str {
        if self.separated {
            "Yes"
        } else {
            "No"
        }
    }

    /// Pretty-printed JSON for downstream consumers
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(c: char) -> VertexLabel {
        VertexLabel::from(c)
    }

    #[test]
    fn test_plan_requests_are_a_set() {
        let mut plan = RemovalPlan::new();
        plan.request(v('A'), v('B'));
        plan.request(v('A'), v('B'));
        assert_eq!(plan.len(), 1);

        plan.request_both(v('B'), v('C'));
        assert_eq!(plan.len(), 3);
        assert!(plan.contains(&EdgeKey::new(v('C'), v('B'))));
    }

    #[test]
    fn test_merge_is_union() {
        let mut left = RemovalPlan::new();
        left.request(v('A'), v('B'));
        let mut right = RemovalPlan::new();
        right.request(v('A'), v('B'));
        right.request(v('C'), v('B'));

        let merged = left.clone().merge(right.clone());
        assert_eq!(merged.len(), 2);
        assert_eq!(merged, right.merge(left));
    }
}
