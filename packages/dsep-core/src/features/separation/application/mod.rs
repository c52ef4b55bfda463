//! Separation Application Layer
//!
//! Main entry point: `DSeparationAnalyzer::analyze()`

pub mod analyzer;

pub use analyzer::DSeparationAnalyzer;
