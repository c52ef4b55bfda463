//! Network Ports - Interface Layer
//!
//! Readers of network description documents implement [`NetworkParser`].
//! Implementation: see `adapters/cgg.rs`.

use std::path::Path;

use crate::errors::Result;
use crate::features::network::domain::Network;

/// Network description reader
///
/// # Implementors
/// - `CggParser` (adapters/cgg.rs)
pub trait NetworkParser: Send + Sync {
    /// Parse a whole document held in memory
    fn parse_str(&self, content: &str) -> Result<Network>;

    /// Read and parse a document from disk
    fn parse_file(&self, path: &Path) -> Result<Network> {
        let content = std::fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// File extension this parser handles, without the dot
    fn supported_extension(&self) -> &'static str;
}
