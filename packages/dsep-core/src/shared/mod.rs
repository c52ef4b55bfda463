//! Shared module - Common types used by every feature

pub mod models;

// Re-exports for convenience
pub use models::*;
