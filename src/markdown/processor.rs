//! File processing API
//!
//! Tokenizes sources and renders the resulting token streams in one of the supported
//! output formats.
//!
//! ```rust,ignore
//! use mdlex::markdown::processor::{process_source, OutputFormat};
//!
//! let output = process_source("a __b__", OutputFormat::Simple, false)?;
//! assert_eq!(output, "<text:a ><double_underscore:__><text:b><double_underscore:__>");
//! ```

use crate::markdown::lexing::Tokenizer;
use crate::markdown::token::{Token, TokenType};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::ops::Range;
use std::path::Path;
use std::str::FromStr;

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Simple,
        OutputFormat::Json,
        OutputFormat::Yaml,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Simple => "one <kind:text> tag per token",
            OutputFormat::Json => "pretty-printed JSON records",
            OutputFormat::Yaml => "YAML records",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| ProcessingError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    InvalidFormat(String),
    Io(String),
    Serialization(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(
                f,
                "Invalid format: {} (expected one of: {})",
                format,
                available_formats().join(", ")
            ),
            ProcessingError::Io(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

/// Serialized shape of one token
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: TokenType,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    span: Option<Range<usize>>,
}

/// Format tokens according to the specified output format.
///
/// `with_spans` controls whether JSON and YAML records carry byte ranges. The simple format
/// never shows them.
pub fn format_tokens(
    tokens: &[(Token, Range<usize>)],
    format: OutputFormat,
    with_spans: bool,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => Ok(tokens.iter().map(|(token, _)| token.to_string()).collect()),
        OutputFormat::Json => serde_json::to_string_pretty(&records(tokens, with_spans))
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        OutputFormat::Yaml => serde_yaml::to_string(&records(tokens, with_spans))
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
    }
}

fn records(tokens: &[(Token, Range<usize>)], with_spans: bool) -> Vec<TokenRecord<'_>> {
    tokens
        .iter()
        .map(|(token, span)| TokenRecord {
            kind: token.kind(),
            text: token.text(),
            span: with_spans.then(|| span.clone()),
        })
        .collect()
}

/// Tokenize `source` and render it
pub fn process_source(
    source: &str,
    format: OutputFormat,
    with_spans: bool,
) -> Result<String, ProcessingError> {
    let tokens = Tokenizer::default().tokenize_spanned(source);
    format_tokens(&tokens, format, with_spans)
}

/// Read, tokenize and render a file
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    format: OutputFormat,
    with_spans: bool,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    let content = fs::read_to_string(file_path)
        .map_err(|e| ProcessingError::Io(format!("{}: {}", file_path.display(), e)))?;
    process_source(&content, format, with_spans)
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    OutputFormat::ALL
        .iter()
        .map(|format| format.name().to_string())
        .collect()
}
