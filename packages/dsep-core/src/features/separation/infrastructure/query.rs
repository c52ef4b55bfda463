//! Separation query over a pruned connection graph

use crate::features::path_enumeration::{enumerate_paths, Path};
use crate::features::separation::domain::ConnectionGraph;
use crate::shared::models::VertexLabel;

/// x and y are separated iff no x–y path survives pruning
pub fn are_separated(connection_graph: &ConnectionGraph, x: VertexLabel, y: VertexLabel) -> bool {
    residual_paths(connection_graph, x, y).is_empty()
}

/// x–y paths still open in the connection graph
pub fn residual_paths(
    connection_graph: &ConnectionGraph,
    x: VertexLabel,
    y: VertexLabel,
) -> Vec<Path> {
    enumerate_paths(connection_graph, x, y)
}
