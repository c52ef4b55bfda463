//! Analysis configuration
//!
//! Two knobs, both optional:
//! - `descendant_scope`: how far below a collider evidence is searched
//! - `parallel`: decide per-path edge removals on the rayon pool
//!
//! # Examples
//!
//! ```rust,ignore
//! use dsep_core::config::{AnalysisConfig, DescendantScope};
//!
//! // Defaults: one-hop descendant check, sequential
//! let config = AnalysisConfig::default();
//!
//! // Builder-style override
//! let config = AnalysisConfig::default().descendant_scope(DescendantScope::Transitive);
//!
//! // YAML file (requires `version: 1`)
//! let config = AnalysisConfig::from_yaml("analysis.yaml")?;
//! ```

pub mod analysis_config;

pub use analysis_config::{AnalysisConfig, DescendantScope, CONFIG_VERSION};
