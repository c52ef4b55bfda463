pub mod collider;
pub mod connection_graph;
pub mod descendant;
pub mod query;

pub use collider::is_collider;
pub use connection_graph::{apply_plan, build_connection_graph, ConnectionGraphBuilder, PrunedGraph};
pub use descendant::{has_evidence_descendant, has_evidence_descendant_transitive};
pub use query::{are_separated, residual_paths};
