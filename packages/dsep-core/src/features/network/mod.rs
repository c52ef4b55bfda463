//! Network: a graph plus the separation question asked of it

pub mod domain;
pub mod ports;

pub use domain::{Network, VertexRole};
pub use ports::NetworkParser;
