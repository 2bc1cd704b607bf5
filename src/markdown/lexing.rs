//! Lexer
//!
//!     This module builds the token stream for the markup format. Unlike a single-pass lexer,
//!     tokenization here is a small loop over two collaborating pieces: scanners that recognize
//!     one raw token at the front of the remaining input, and a chain of rewrite rules that
//!     correct the stream as it grows.
//!
//! The Tokenizing Loop
//!
//!     Each iteration:
//!         1. Dispatch. The registered scanners are tried in order against the remaining input.
//!            The first one to match wins. See [dispatch](dispatch). When nothing matches, an
//!            end marker is produced.
//!
//!         2. Rewrite. The candidate is checked against the last one or two tokens already
//!            emitted. See [rewrite](rewrite). A matching rule either absorbs the previous
//!            token into a synthetic one, or demotes the previous token to plain text.
//!
//!         3. Append and advance. The candidate is appended and the cursor moves forward by the
//!            length of the raw token the scanner consumed.
//!
//!     The loop ends on the end marker, which is then dropped from the output.
//!
//!     Escapes are consumed: `\_` comes out as a single text token `_`, with no trace of the
//!     backslash left in the stream.
//!
//! Scanner Order
//!
//!     Order is part of the contract: the delimiter scanner must run before the plain text
//!     scanner, which otherwise matches anything. See [scanners](scanners).
//!
//! Spans
//!
//!     Tokens are paired with the byte range of the source they cover, the same
//!     `(Token, Range<usize>)` shape used throughout the crate. Merged tokens cover the
//!     ranges of everything they absorbed.

pub mod dispatch;
pub mod rewrite;
pub mod scanners;
pub mod tokenizer;

pub use dispatch::dispatch;
pub use rewrite::RewriteRule;
pub use scanners::{DelimiterScanner, PlainTextScanner, Scanner};
pub use tokenizer::Tokenizer;

use crate::markdown::token::Token;
use std::ops::Range;

/// Canonical alias for spanned token streams
pub type SpannedTokens = Vec<(Token, Range<usize>)>;

/// Tokenize source text with the default scanners
pub fn tokenize(source: &str) -> Vec<Token> {
    Tokenizer::default().tokenize(source)
}

/// Tokenize source text with the default scanners, keeping byte ranges
pub fn tokenize_spanned(source: &str) -> SpannedTokens {
    Tokenizer::default().tokenize_spanned(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::testing::factories::mk_tokens;
    use crate::markdown::token::{detokenize, TokenType};

    #[test]
    fn test_emphasis_pattern() {
        let tokens = tokenize_spanned("a __bold__ and _it_");

        assert_eq!(
            tokens,
            mk_tokens(&[
                (Token::text_run("a "), 0, 2),
                (Token::double_underscore(), 2, 4),
                (Token::text_run("bold"), 4, 8),
                (Token::double_underscore(), 8, 10),
                (Token::text_run(" and "), 10, 15),
                (Token::underscore(), 15, 16),
                (Token::text_run("it"), 16, 18),
                (Token::underscore(), 18, 19),
            ])
        );
    }

    #[test]
    fn test_escaped_emphasis_pattern() {
        let tokens = tokenize("\\_not\\_");

        assert_eq!(
            tokens,
            vec![
                Token::text_run("_"),
                Token::text_run("not"),
                Token::text_run("_"),
            ]
        );
    }

    #[test]
    fn test_round_trip() {
        let source = "snake_case_1_000 and __x__ 42";
        assert_eq!(detokenize(&tokenize(source)), source);
    }

    #[test]
    fn test_empty_source() {
        assert!(tokenize("").is_empty());
        assert!(tokenize_spanned("").is_empty());
    }

    #[test]
    fn test_never_emits_end_marker() {
        for source in ["", "_", "\\", "1", "a", "__\\\\1_2"] {
            assert!(tokenize(source)
                .iter()
                .all(|token| token.kind() != TokenType::EndMarker));
        }
    }
}
