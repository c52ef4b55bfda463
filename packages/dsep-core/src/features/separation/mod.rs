//! Separation
//!
//! Collider classification, evidence-descendant checks, connection graph
//! pruning and the final separation query.
//!
//! Pipeline:
//! 1. enumerate every simple x–y path over the original graph
//! 2. per path, decide which edges its blocked interior vertices cut
//! 3. apply all cuts to an undirected copy in one pass
//! 4. x and y are separated iff no x–y path survives in the copy

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::DSeparationAnalyzer;
pub use domain::{ConnectionGraph, RemovalPlan, SeparationReport};
pub use infrastructure::{
    apply_plan, are_separated, build_connection_graph, has_evidence_descendant,
    has_evidence_descendant_transitive, is_collider, residual_paths, ConnectionGraphBuilder,
    PrunedGraph,
};
pub use ports::DescendantCheck;
