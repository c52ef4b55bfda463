//! Error types for dsep-core
//!
//! Every fallible operation of the crate reports through [`DsepError`].
//! Misuse of an internal precondition (e.g. asking whether a path endpoint
//! is a collider) is a panic, not an error value.

use thiserror::Error;

/// Main error type for dsep-core operations
#[derive(Debug, Error)]
pub enum DsepError {
    /// Vertex label is not exactly one character
    #[error("Invalid vertex label '{label}': vertex labels must be exactly one character")]
    InvalidVertexLabel { label: String },

    /// Vertex label already present in the graph
    #[error("Duplicate vertex '{0}'")]
    DuplicateVertex(String),

    /// Edge, query or evidence references a vertex the graph does not contain
    #[error("Unknown vertex '{vertex}' referenced by {context}")]
    UnknownVertex { vertex: String, context: String },

    /// Edge key already present in the graph
    #[error("Duplicate edge '{0}'")]
    DuplicateEdge(String),

    /// Edge key string is not of the form `source-target`
    #[error("Invalid edge key '{0}': expected 'source-target'")]
    InvalidEdgeKey(String),

    /// Network whose parts do not fit together (e.g. graph directionality
    /// disagrees with the network type)
    #[error("Invalid network: {0}")]
    InvalidNetwork(String),

    /// Malformed network description document
    #[error("Parse error: {0}")]
    Parse(String),

    /// No parser registered for the file extension
    #[error("Unsupported file format '{0}'")]
    UnsupportedFormat(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML decoding error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DsepError {
    /// Create an invalid label error
    pub fn invalid_label(label: impl Into<String>) -> Self {
        DsepError::InvalidVertexLabel {
            label: label.into(),
        }
    }

    /// Create an unknown vertex error, `context` names the referencing item
    pub fn unknown_vertex(vertex: impl ToString, context: impl Into<String>) -> Self {
        DsepError::UnknownVertex {
            vertex: vertex.to_string(),
            context: context.into(),
        }
    }

    /// Create a parse error
    pub fn parse_error(msg: impl Into<String>) -> Self {
        DsepError::Parse(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        DsepError::Config(msg.into())
    }

    /// Stable machine-readable name of the error class
    pub fn kind(&self) -> &'static str {
        match self {
            DsepError::InvalidVertexLabel { .. } => "invalid_vertex_label",
            DsepError::DuplicateVertex(_) => "duplicate_vertex",
            DsepError::UnknownVertex { .. } => "unknown_vertex",
            DsepError::DuplicateEdge(_) => "duplicate_edge",
            DsepError::InvalidEdgeKey(_) => "invalid_edge_key",
            DsepError::InvalidNetwork(_) => "invalid_network",
            DsepError::Parse(_) => "parse",
            DsepError::UnsupportedFormat(_) => "unsupported_format",
            DsepError::Io(_) => "io",
            DsepError::Yaml(_) => "yaml",
            DsepError::Json(_) => "json",
            DsepError::Config(_) => "config",
        }
    }
}

/// Result type alias for dsep operations
pub type Result<T> = std::result::Result<T, DsepError>;
