//! Path Enumerator
//!
//! Depth-first enumeration of every simple path between two vertices.

pub mod domain;
pub mod infrastructure;

pub use domain::Path;
pub use infrastructure::enumerate_paths;
