//! Parser lookup by file extension

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::adapters::cgg::CggParser;
use crate::errors::{DsepError, Result};
use crate::features::network::{Network, NetworkParser};

/// Network parsers keyed by lowercase file extension
pub struct ParserRegistry {
    parsers: HashMap<String, Box<dyn NetworkParser>>,
}

impl ParserRegistry {
    /// Registry without any parser
    pub fn empty() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Register `parser` for its extension, replacing any previous one
    pub fn register(&mut self, parser: Box<dyn NetworkParser>) {
        let ext = parser.supported_extension().to_ascii_lowercase();
        self.parsers.insert(ext, parser);
    }

    /// Registered extensions, sorted
    pub fn extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.parsers.keys().map(String::as_str).collect();
        exts.sort_unstable();
        exts
    }

    /// Parser for `ext` (case-insensitive, without the dot)
    pub fn parser_for(&self, ext: &str) -> Result<&dyn NetworkParser> {
        self.parsers
            .get(&ext.to_ascii_lowercase())
            .map(|p| p.as_ref())
            .ok_or_else(|| {
                DsepError::UnsupportedFormat(format!(
                    "no parser for '.{ext}' files (supported: {})",
                    self.extensions().join(", ")
                ))
            })
    }

    /// Parse `path` with the parser registered for its extension
    pub fn parse_file(&self, path: &Path) -> Result<Network> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        let parser = self.parser_for(ext)?;
        debug!(path = %path.display(), ext, "parsing network description");
        parser.parse_file(path)
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(CggParser::new()));
        registry
    }
}

impl std::fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("extensions", &self.extensions())
            .finish()
    }
}

/// Load a network description with the default registry
pub fn load_network(path: impl AsRef<Path>) -> Result<Network> {
    ParserRegistry::default().parse_file(path.as_ref())
}
