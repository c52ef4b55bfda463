//! Graph Model
//!
//! Labeled-vertex, labeled-edge graph with uniformly directed (Bayesian) or
//! undirected (Markov) edges.

pub mod domain;
pub mod infrastructure;

pub use domain::GraphDto;
pub use infrastructure::LabeledGraph;
