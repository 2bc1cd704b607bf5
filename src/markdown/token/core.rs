//! Token definitions for the markup format
//!
//! A token is a classified lexical unit: a [TokenType] plus the literal text it stands for.
//! Tokens are produced either by scanners (raw tokens, whose text is exactly the consumed
//! input) or by the rewrite rules of the tokenizer (synthetic tokens, merged from one or two
//! tokens already emitted).
//!
//! Tokens are immutable once built. Rewrites never edit a token, they replace it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// All kinds of token the tokenizer can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Opaque literal run, emitted as-is
    Text,
    /// A run of ASCII digits
    Num,
    /// Single emphasis delimiter `_`
    Underscore,
    /// Two adjacent underscores, merged by the tokenizer
    DoubleUnderscore,
    /// The escape introducer `\`
    EscapeChar,
    /// End of input sentinel. Never present in a finished token stream.
    EndMarker,
}

impl TokenType {
    /// Check if this kind is an emphasis delimiter
    pub fn is_underscore(&self) -> bool {
        matches!(self, TokenType::Underscore | TokenType::DoubleUnderscore)
    }

    /// Check if this kind loses its meaning when preceded by an escape
    pub fn is_escapable(&self) -> bool {
        matches!(
            self,
            TokenType::Underscore | TokenType::DoubleUnderscore | TokenType::EscapeChar
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Text => "text",
            TokenType::Num => "num",
            TokenType::Underscore => "underscore",
            TokenType::DoubleUnderscore => "double_underscore",
            TokenType::EscapeChar => "escape_char",
            TokenType::EndMarker => "end_marker",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single lexical unit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    kind: TokenType,
    text: String,
}

impl Token {
    pub fn new(kind: TokenType, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    /// The end of input sentinel
    pub fn end_marker() -> Self {
        Token::new(TokenType::EndMarker, "")
    }

    pub fn text_run(text: impl Into<String>) -> Self {
        Token::new(TokenType::Text, text)
    }

    pub fn num(text: impl Into<String>) -> Self {
        Token::new(TokenType::Num, text)
    }

    pub fn underscore() -> Self {
        Token::new(TokenType::Underscore, "_")
    }

    pub fn double_underscore() -> Self {
        Token::new(TokenType::DoubleUnderscore, "__")
    }

    pub fn escape_char() -> Self {
        Token::new(TokenType::EscapeChar, "\\")
    }

    pub fn kind(&self) -> TokenType {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of input characters this token advances the cursor by.
    ///
    /// The end marker always has length zero.
    pub fn len(&self) -> usize {
        match self.kind {
            TokenType::EndMarker => 0,
            _ => self.text.chars().count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_end_marker(&self) -> bool {
        self.kind == TokenType::EndMarker
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}:{}>", self.kind, self.text)
    }
}
