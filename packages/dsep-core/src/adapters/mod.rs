//! External Adapters
//!
//! Readers that turn network description files into [`Network`](crate::Network)s.

pub mod cgg;
pub mod registry;

pub use cgg::CggParser;
pub use registry::{load_network, ParserRegistry};
