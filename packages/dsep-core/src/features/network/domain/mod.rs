//! Network domain models

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{DsepError, Result};
use crate::features::graph::LabeledGraph;
use crate::shared::models::{NetworkType, VertexLabel};

/// Part a vertex plays in the separation question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VertexRole {
    QueryX,
    QueryY,
    Evidence,
    Unobserved,
}

impl VertexRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            VertexRole::QueryX => "query_x",
            VertexRole::QueryY => "query_y",
            VertexRole::Evidence => "evidence",
            VertexRole::Unobserved => "unobserved",
        }
    }
}

/// Graphical model together with the query `x ⊥ y | evidence ?`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NetworkDto", into = "NetworkDto")]
pub struct Network {
    network_type: NetworkType,
    graph: LabeledGraph,
    x: VertexLabel,
    y: VertexLabel,
    evidence: BTreeSet<VertexLabel>,
}

impl Network {
    /// Bundle a graph with a query
    ///
    /// `x`, `y` and every evidence vertex must exist in `graph`, and the
    /// graph's directionality must be the one `network_type` prescribes.
    /// Evidence may contain `x` or `y`.
    pub fn new(
        network_type: NetworkType,
        graph: LabeledGraph,
        x: VertexLabel,
        y: VertexLabel,
        evidence: impl IntoIterator<Item = VertexLabel>,
    ) -> Result<Self> {
        if graph.directionality() != network_type.directionality() {
            return Err(DsepError::InvalidNetwork(format!(
                "{} network requires {} edges, graph is {}",
                network_type,
                network_type.directionality().as_str(),
                graph.directionality().as_str()
            )));
        }
        for (vertex, context) in [(x, "query 'x'"), (y, "query 'y'")] {
            if !graph.contains_vertex(vertex) {
                return Err(DsepError::unknown_vertex(vertex, context));
            }
        }
        let evidence: BTreeSet<VertexLabel> = evidence.into_iter().collect();
        if let Some(missing) = evidence.iter().find(|v| !graph.contains_vertex(**v)) {
            return Err(DsepError::unknown_vertex(missing, "evidence"));
        }

        Ok(Self {
            network_type,
            graph,
            x,
            y,
            evidence,
        })
    }

    pub fn network_type(&self) -> NetworkType {
        self.network_type
    }

    pub fn graph(&self) -> &LabeledGraph {
        &self.graph
    }

    pub fn x(&self) -> VertexLabel {
        self.x
    }

    pub fn y(&self) -> VertexLabel {
        self.y
    }

    pub fn evidence(&self) -> &BTreeSet<VertexLabel> {
        &self.evidence
    }

    /// Query vertices win over evidence membership
    pub fn role_of(&self, vertex: VertexLabel) -> VertexRole {
        if vertex == self.x {
            VertexRole::QueryX
        } else if vertex == self.y {
            VertexRole::QueryY
        } else if self.evidence.contains(&vertex) {
            VertexRole::Evidence
        } else {
            VertexRole::Unobserved
        }
    }

    /// x or y is itself conditioned on
    pub fn is_degenerate(&self) -> bool {
        self.evidence.contains(&self.x) || self.evidence.contains(&self.y)
    }
}

/// `A ⊥ C | B,D ?`
impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let evidence: Vec<String> = self.evidence.iter().map(|v| v.to_string()).collect();
        write!(f, "{} ⊥ {} | {} ?", self.x, self.y, evidence.join(","))
    }
}

/// Serializable DTO for Network
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct NetworkDto {
    network_type: NetworkType,
    graph: LabeledGraph,
    x: VertexLabel,
    y: VertexLabel,
    evidence: Vec<VertexLabel>,
}

impl TryFrom<NetworkDto> for Network {
    type Error = DsepError;

    fn try_from(dto: NetworkDto) -> Result<Self> {
        Network::new(dto.network_type, dto.graph, dto.x, dto.y, dto.evidence)
    }
}

impl From<Network> for NetworkDto {
    fn from(network: Network) -> Self {
        Self {
            network_type: network.network_type,
            graph: network.graph,
            x: network.x,
            y: network.y,
            evidence: network.evidence.into_iter().collect(),
        }
    }
}
