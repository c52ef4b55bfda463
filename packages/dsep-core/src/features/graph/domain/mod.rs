//! Graph domain models
//!
//! Serializable form of [`LabeledGraph`]. Deserialization goes back through
//! the validating construction API, so a loaded graph satisfies the same
//! invariants as a built one.

use serde::{Deserialize, Serialize};

use crate::features::graph::infrastructure::LabeledGraph;
use crate::shared::models::{Directionality, EdgeKey, VertexLabel};

/// Serializable DTO for LabeledGraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDto {
    pub directionality: Directionality,
    pub vertices: Vec<VertexLabel>,
    pub edges: Vec<EdgeKey>,
}

impl From<&LabeledGraph> for GraphDto {
    fn from(graph: &LabeledGraph) -> Self {
        Self {
            directionality: graph.directionality(),
            vertices: graph.vertices().collect(),
            edges: graph.edges().collect(),
        }
    }
}

impl TryFrom<GraphDto> for LabeledGraph {
    type Error = crate::errors::DsepError;

    fn try_from(dto: GraphDto) -> Result<Self, Self::Error> {
        let mut graph = LabeledGraph::new(dto.directionality);
        for vertex in dto.vertices {
            graph.add_vertex_label(vertex)?;
        }
        for edge in dto.edges {
            graph.add_edge(edge.source, edge.target)?;
        }
        Ok(graph)
    }
}

// Custom serde implementation via DTO
impl Serialize for LabeledGraph {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        GraphDto::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LabeledGraph {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let dto = GraphDto::deserialize(deserializer)?;
        LabeledGraph::try_from(dto).map_err(serde::de::Error::custom)
    }
}
