//! Shared models

mod edge_key;
mod network_type;
mod vertex;

pub use edge_key::EdgeKey;
pub use network_type::{Directionality, NetworkType};
pub use vertex::VertexLabel;
