//! Network type and edge directionality

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{DsepError, Result};

/// Directionality shared by every edge of a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Directionality {
    Directed,
    Undirected,
}

impl Directionality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Directionality::Directed => "directed",
            Directionality::Undirected => "undirected",
        }
    }

    pub fn is_directed(&self) -> bool {
        matches!(self, Directionality::Directed)
    }
}

/// Kind of probabilistic graphical model
///
/// Fixes the directionality of every edge at construction time:
/// Bayesian networks are directed, Markov networks undirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NetworkType {
    Bayesian,
    Markov,
}

impl NetworkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkType::Bayesian => "Bayesian",
            NetworkType::Markov => "Markov",
        }
    }

    pub fn directionality(&self) -> Directionality {
        match self {
            NetworkType::Bayesian => Directionality::Directed,
            NetworkType::Markov => Directionality::Undirected,
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkType {
    type Err = DsepError;

    /// Case-insensitive: `bayesian`, `BAYESIAN` and `Bayesian` are all accepted.
    fn from_str(s: &str) -> Result<Self> {
        [NetworkType::Bayesian, NetworkType::Markov]
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                DsepError::parse_error(format!(
                    "Unknown network type '{s}', expected 'Bayesian' or 'Markov'"
                ))
            })
    }
}

impl TryFrom<String> for NetworkType {
    type Error = DsepError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<NetworkType> for String {
    fn from(t: NetworkType) -> Self {
        t.as_str().to_string()
    }
}
