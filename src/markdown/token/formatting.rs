//! Detokenizer for the markup format
//!
//! Converts a stream of tokens back into source text. Every token carries the literal text
//! it was scanned or merged from, so for streams produced by the built-in scanners the
//! round trip source -> tokens -> source is exact. The one exception is escaping: an escape
//! character is absorbed by the token it escapes and does not come back out.

use super::core::Token;

/// Trait for converting a token to its source representation
pub trait ToSimpleString {
    fn to_simple_string(&self) -> String;
}

impl ToSimpleString for Token {
    fn to_simple_string(&self) -> String {
        self.text().to_string()
    }
}

/// Rebuild source text from a token stream
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(Token::text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::token::TokenType;

    #[test]
    fn test_detokenize_concatenates_in_order() {
        let tokens = vec![
            Token::text_run("a"),
            Token::double_underscore(),
            Token::num("12"),
            Token::new(TokenType::Text, "_"),
        ];
        assert_eq!(detokenize(&tokens), "a__12_");
    }

    #[test]
    fn test_detokenize_empty() {
        assert_eq!(detokenize(&[]), "");
    }

    #[test]
    fn test_to_simple_string() {
        assert_eq!(Token::escape_char().to_simple_string(), "\\");
    }
}
