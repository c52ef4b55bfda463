//! Edge identity
//!
//! An edge is identified by its ordered endpoint pair, rendered `source-target`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::VertexLabel;
use crate::errors::{DsepError, Result};

/// Composite `source-target` key of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EdgeKey {
    pub source: VertexLabel,
    pub target: VertexLabel,
}

impl EdgeKey {
    pub const fn new(source: VertexLabel, target: VertexLabel) -> Self {
        Self { source, target }
    }

    /// The same endpoints in the opposite order
    pub const fn reversed(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }

    pub fn touches(&self, vertex: VertexLabel) -> bool {
        self.source == vertex || self.target == vertex
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.target)
    }
}

impl FromStr for EdgeKey {
    type Err = DsepError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || DsepError::InvalidEdgeKey(s.to_string());
        let (source, target) = s.split_once('-').ok_or_else(invalid)?;
        let source = VertexLabel::parse(source).map_err(|_| invalid())?;
        let target = VertexLabel::parse(target).map_err(|_| invalid())?;
        Ok(EdgeKey::new(source, target))
    }
}

impl TryFrom<String> for EdgeKey {
    type Error = DsepError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<EdgeKey> for String {
    fn from(key: EdgeKey) -> Self {
        key.to_string()
    }
}
