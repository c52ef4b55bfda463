//! d-separation analyzer
//!
//! Runs the full pipeline for one [`Network`]: prune the connection graph,
//! then look for a surviving x–y path.

use tracing::{info, warn};

use crate::config::AnalysisConfig;
use crate::errors::Result;
use crate::features::network::Network;
use crate::features::separation::domain::SeparationReport;
use crate::features::separation::infrastructure::{residual_paths, ConnectionGraphBuilder};
use crate::shared::models::NetworkType;

/// Answers `x ⊥ y | evidence ?` for networks
#[derive(Debug, Clone, Default)]
pub struct DSeparationAnalyzer {
    builder: ConnectionGraphBuilder,
}

impl DSeparationAnalyzer {
    /// Analyzer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer with a validated custom configuration
    pub fn with_config(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            builder: ConnectionGraphBuilder::with_config(config),
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        self.builder.config()
    }

    /// Full report for the network's query
    pub fn analyze(&self, network: &Network) -> SeparationReport {
        let (x, y) = (network.x(), network.y());

        if network.is_degenerate() {
            warn!(query = %network, "query vertex is part of the evidence");
        }
        if network.network_type() == NetworkType::Markov {
            warn!(
                query = %network,
                "undirected network: collider status follows the declared edge key orientation"
            );
        }

        let pruned = self.builder.prune(network.graph(), x, y, network.evidence());
        let residual = residual_paths(&pruned.connection_graph, x, y);
        let separated = residual.is_empty();

        info!(
            query = %network,
            network_type = %network.network_type(),
            evidence = network.evidence().len(),
            descendant_scope = self.config().descendant_scope.as_str(),
            paths = pruned.examined_paths.len(),
            removed = pruned.removed_edges.len(),
            separated,
            "d-separation analyzed"
        );

        SeparationReport {
            x,
            y,
            evidence: network.evidence().iter().copied().collect(),
            separated,
            connection_graph: pruned.connection_graph,
            examined_paths: pruned.examined_paths,
            removed_edges: pruned.removed_edges,
            residual_paths: residual,
        }
    }

    /// Verdict only
    pub fn are_separated(&self, network: &Network) -> bool {
        self.analyze(network).separated
    }
}
