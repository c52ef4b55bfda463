//! Analysis configuration (YAML schema v1)

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{DsepError, Result};

/// Current configuration schema version
pub const CONFIG_VERSION: u32 = 1;

/// How far below a collider evidence is searched before the collider
/// counts as activated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescendantScope {
    /// Direct successors only
    #[default]
    Direct,
    /// Every vertex reachable through outgoing edges
    Transitive,
}

impl DescendantScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            DescendantScope::Direct => "direct",
            DescendantScope::Transitive => "transitive",
        }
    }
}

/// Analysis configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Schema version (always 1 for v1)
    pub version: u32,

    #[serde(default)]
    pub descendant_scope: DescendantScope,

    /// Ignored unless the crate is built with the `parallel` feature
    #[serde(default)]
    pub parallel: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            descendant_scope: DescendantScope::Direct,
            parallel: false,
        }
    }
}

impl AnalysisConfig {
    pub fn descendant_scope(mut self, scope: DescendantScope) -> Self {
        self.descendant_scope = scope;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Whether per-path decisions actually run on the rayon pool
    pub fn runs_parallel(&self) -> bool {
        cfg!(feature = "parallel") && self.parallel
    }

    pub fn validate(&self) -> Result<()> {
        if self.version != CONFIG_VERSION {
            return Err(DsepError::config(format!(
                "Unsupported configuration version {}. Supported versions: {}",
                self.version, CONFIG_VERSION
            )));
        }
        Ok(())
    }

    /// Load and validate a configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: AnalysisConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
