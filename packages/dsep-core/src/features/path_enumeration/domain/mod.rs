//! Path domain model

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shared::models::VertexLabel;

/// Simple path: an ordered list of distinct vertices
///
/// Produced by the enumerator and consumed by the pruning and query steps;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<VertexLabel>);

impl Path {
    /// One-vertex path `[start]`
    pub fn single(start: VertexLabel) -> Self {
        Path(vec![start])
    }

    pub fn from_vertices(vertices: Vec<VertexLabel>) -> Self {
        Path(vertices)
    }

    /// This path extended by `next`
    pub fn extended(&self, next: VertexLabel) -> Self {
        let mut vertices = Vec::with_capacity(self.0.len() + 1);
        vertices.extend_from_slice(&self.0);
        vertices.push(next);
        Path(vertices)
    }

    pub fn vertices(&self) -> &[VertexLabel] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn start(&self) -> Option<VertexLabel> {
        self.0.first().copied()
    }

    pub fn end(&self) -> Option<VertexLabel> {
        self.0.last().copied()
    }

    pub fn contains(&self, vertex: VertexLabel) -> bool {
        self.0.contains(&vertex)
    }

    pub fn position(&self, vertex: VertexLabel) -> Option<usize> {
        self.0.iter().position(|&v| v == vertex)
    }

    /// Whether `vertex` lies on the path but is neither endpoint
    pub fn is_interior(&self, vertex: VertexLabel) -> bool {
        matches!(self.position(vertex), Some(i) if i > 0 && i + 1 < self.0.len())
    }

    /// `(left, vertex, right)` for every interior vertex, in path order
    pub fn interior(&self) -> impl Iterator<Item = (VertexLabel, VertexLabel, VertexLabel)> + '_ {
        self.0.windows(3).map(|w| (w[0], w[1], w[2]))
    }

    /// Path neighbours of an interior vertex
    pub fn neighbors_of(&self, vertex: VertexLabel) -> Option<(VertexLabel, VertexLabel)> {
        let i = self.position(vertex)?;
        if i == 0 || i + 1 >= self.0.len() {
            return None;
        }
        Some((self.0[i - 1], self.0[i + 1]))
    }
}

/// Concatenated labels, e.g. `ABC`
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.0 {
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
