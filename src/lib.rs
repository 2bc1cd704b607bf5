//! # mdlex
//!
//! A tokenizer for a markdown-like markup format.
//!
//! Source text is turned into a flat, corrected stream of typed tokens (text runs, digit runs,
//! emphasis delimiters and escapes) ready to be consumed by a document parser. See the
//! [lexing module](markdown::lexing) for how the stream is built.

pub mod markdown;

pub use markdown::lexing::{tokenize, Tokenizer};
pub use markdown::token::{Token, TokenType};
