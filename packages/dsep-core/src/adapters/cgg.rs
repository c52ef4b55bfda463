//! CGG network description parser
//!
//! Grammar (whitespace and newlines are insignificant, `#` starts a comment):
//!
//! ```text
//! type: Bayesian | Markov
//! vertices:
//!   - name: "A"
//! edges:
//!   - v1: "A" v2: "B"
//! x: "A"
//! y: "C"
//! evidence:
//!   - name: "B"
//! ```
//!
//! Fields appear in exactly this order. Every list may be empty. Anything
//! after the evidence list is an error.

use crate::errors::{DsepError, Result};
use crate::features::graph::LabeledGraph;
use crate::features::network::{Network, NetworkParser};
use crate::shared::models::{NetworkType, VertexLabel};

#[derive(Debug, Clone, PartialEq)]
enum TokenKind {
    Word(String),
    Str(String),
    Colon,
    Dash,
    Eof,
}

#[derive(Debug, Clone)]
struct Token {
    kind: TokenKind,
    line: usize,
}

/// Parser for `.cgg` documents
#[derive(Debug, Clone, Copy, Default)]
pub struct CggParser;

impl CggParser {
    pub fn new() -> Self {
        Self
    }

    /// Tokenize input string
    fn tokenize(input: &str) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let chars: Vec<char> = input.chars().collect();
        let mut line = 1;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if c == '\n' {
                line += 1;
                i += 1;
                continue;
            }

            if c.is_whitespace() {
                i += 1;
                continue;
            }

            // Comments run to end of line
            if c == '#' {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
                continue;
            }

            match c {
                ':' => {
                    tokens.push(Token {
                        kind: TokenKind::Colon,
                        line,
                    });
                    i += 1;
                    continue;
                }
                '-' => {
                    tokens.push(Token {
                        kind: TokenKind::Dash,
                        line,
                    });
                    i += 1;
                    continue;
                }
                _ => {}
            }

            // String literals
            if c == '"' || c == '\'' {
                let quote = c;
                let start_line = line;
                i += 1;
                let start = i;
                while i < chars.len() && chars[i] != quote && chars[i] != '\n' {
                    i += 1;
                }
                if i >= chars.len() || chars[i] != quote {
                    return Err(error_at(start_line, "Unterminated string"));
                }
                let value: String = chars[start..i].iter().collect();
                tokens.push(Token {
                    kind: TokenKind::Str(value),
                    line: start_line,
                });
                i += 1; // closing quote
                continue;
            }

            // Words
            if c.is_alphanumeric() || c == '_' {
                let start = i;
                while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();
                tokens.push(Token {
                    kind: TokenKind::Word(word),
                    line,
                });
                continue;
            }

            return Err(error_at(line, format!("Unexpected character '{c}'")));
        }

        tokens.push(Token {
            kind: TokenKind::Eof,
            line,
        });
        Ok(tokens)
    }
}

impl NetworkParser for CggParser {
    fn parse_str(&self, content: &str) -> Result<Network> {
        let tokens = Self::tokenize(content)?;
        DocumentParser { tokens, pos: 0 }.parse_document()
    }

    fn supported_extension(&self) -> &'static str {
        "cgg"
    }
}

fn error_at(line: usize, message: impl std::fmt::Display) -> DsepError {
    DsepError::parse_error(format!("Line {line}: {message}"))
}

/// Recursive-descent pass over the token stream
struct DocumentParser {
    tokens: Vec<Token>,
    pos: usize,
}

impl DocumentParser {
    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
    }

    fn error(&self, message: impl std::fmt::Display) -> DsepError {
        error_at(self.current().line, message)
    }

    fn at_list_item(&self) -> bool {
        self.current().kind == TokenKind::Dash
    }

    fn expect_dash(&mut self) -> Result<()> {
        if !self.at_list_item() {
            return Err(self.error("'-' expected"));
        }
        self.advance();
        Ok(())
    }

    /// `label :`
    fn expect_label(&mut self, label: &str) -> Result<()> {
        match &self.current().kind {
            TokenKind::Word(word) if word == label => self.advance(),
            _ => return Err(self.error(format!("Keyword '{label}' expected"))),
        }
        if self.current().kind != TokenKind::Colon {
            return Err(self.error("':' expected"));
        }
        self.advance();
        Ok(())
    }

    /// `label : "value"`
    fn expect_string_field(&mut self, label: &str) -> Result<(String, usize)> {
        self.expect_label(label)?;
        let token = self.current().clone();
        match token.kind {
            TokenKind::Str(value) => {
                self.advance();
                Ok((value, token.line))
            }
            _ => Err(self.error("String expected")),
        }
    }

    fn expect_vertex_field(&mut self, label: &str) -> Result<VertexLabel> {
        let (value, line) = self.expect_string_field(label)?;
        VertexLabel::parse(&value).map_err(|e| error_at(line, e))
    }

    fn expect_network_type(&mut self) -> Result<NetworkType> {
        self.expect_label("type")?;
        let parsed = match &self.current().kind {
            TokenKind::Word(word) => word.parse::<NetworkType>().ok(),
            _ => None,
        };
        let network_type = parsed.ok_or_else(|| self.error("'Bayesian' or 'Markov' expected"))?;
        self.advance();
        Ok(network_type)
    }

    fn parse_document(&mut self) -> Result<Network> {
        let network_type = self.expect_network_type()?;
        let mut graph = LabeledGraph::for_network(network_type);

        self.expect_label("vertices")?;
        while self.at_list_item() {
            self.expect_dash()?;
            let line = self.current().line;
            let name = self.expect_vertex_field("name")?;
            graph
                .add_vertex_label(name)
                .map_err(|e| error_at(line, e))?;
        }

        self.expect_label("edges")?;
        while self.at_list_item() {
            self.expect_dash()?;
            let line = self.current().line;
            let v1 = self.expect_vertex_field("v1")?;
            let v2 = self.expect_vertex_field("v2")?;
            graph.add_edge(v1, v2).map_err(|e| error_at(line, e))?;
        }

        let x = self.expect_vertex_field("x")?;
        let y = self.expect_vertex_field("y")?;

        let mut evidence = Vec::new();
        self.expect_label("evidence")?;
        while self.at_list_item() {
            self.expect_dash()?;
            evidence.push(self.expect_vertex_field("name")?);
        }

        if self.current().kind != TokenKind::Eof {
            return Err(self.error("End of file or '-' expected"));
        }

        Network::new(network_type, graph, x, y, evidence)
    }
}
