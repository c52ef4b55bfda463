/*
 * dsep-core - d-separation over graphical models
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (VertexLabel, EdgeKey, NetworkType)
 * - features/    : Vertical slices (graph → path_enumeration → network → separation)
 * - config/      : Analysis configuration (YAML)
 * - adapters/    : Network description readers (.cgg)
 *
 * Answers `x ⊥ y | evidence ?` by pruning a connection graph: every
 * simple x–y path is examined, blocked vertices cut their path edges,
 * and x and y are separated iff no path survives the cuts.
 */

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models
pub mod shared;

/// Feature modules
pub mod features;

/// Analysis configuration
pub mod config;

/// Network description readers
pub mod adapters;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use adapters::{load_network, CggParser, ParserRegistry};
pub use config::{AnalysisConfig, DescendantScope};
pub use errors::{DsepError, Result};
pub use features::graph::LabeledGraph;
pub use features::network::{Network, NetworkParser, VertexRole};
pub use features::path_enumeration::{enumerate_paths, Path};
pub use features::separation::{
    are_separated, build_connection_graph, has_evidence_descendant, is_collider,
    ConnectionGraph, DSeparationAnalyzer, SeparationReport,
};
pub use shared::models::{Directionality, EdgeKey, NetworkType, VertexLabel};
