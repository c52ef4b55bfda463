//! Vertex labels
//!
//! Paths are decoded positionally, one label per position, so a label is
//! exactly one character. The restriction is enforced on construction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{DsepError, Result};

/// Single-character vertex label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VertexLabel(char);

impl VertexLabel {
    /// Parse a label, failing unless `raw` is exactly one character
    pub fn parse(raw: &str) -> Result<Self> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(VertexLabel(c)),
            _ => Err(DsepError::invalid_label(raw)),
        }
    }

    pub const fn from_char(c: char) -> Self {
        VertexLabel(c)
    }

    pub const fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for VertexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VertexLabel {
    type Err = DsepError;

    fn from_str(s: &str) -> Result<Self> {
        VertexLabel::parse(s)
    }
}

impl From<char> for VertexLabel {
    fn from(c: char) -> Self {
        VertexLabel(c)
    }
}

impl TryFrom<String> for VertexLabel {
    type Error = DsepError;

    fn try_from(value: String) -> Result<Self> {
        VertexLabel::parse(&value)
    }
}

impl From<VertexLabel> for String {
    fn from(label: VertexLabel) -> Self {
        label.0.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_char() {
        let label = VertexLabel::parse("A").unwrap();
        assert_eq!(label.as_char(), 'A');
        assert_eq!(label.to_string(), "A");
    }

    #[test]
    fn test_parse_rejects_empty_and_multi_char() {
        assert!(matches!(
            VertexLabel::parse(""),
            Err(DsepError::InvalidVertexLabel { .. })
        ));
        assert!(matches!(
            VertexLabel::parse("AB"),
            Err(DsepError::InvalidVertexLabel { .. })
        ));
    }

    #[test]
    fn test_parse_counts_chars_not_bytes() {
        let label = VertexLabel::parse("λ").unwrap();
        assert_eq!(label.as_char(), 'λ');
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&VertexLabel::from('B')).unwrap();
        assert_eq!(json, "\"B\"");

        let back: VertexLabel = serde_json::from_str("\"B\"").unwrap();
        assert_eq!(back, VertexLabel::from('B'));

        assert!(serde_json::from_str::<VertexLabel>("\"BC\"").is_err());
    }
}
