//! Scanners
//!
//! A scanner recognizes one lexical shape at the very start of the remaining input and turns
//! it into a raw token. Scanners never look past the first lexeme, and a raw token's length
//! is always the number of characters it consumed.
//!
//! Both built-in scanners are logos lexers pulled for a single lexeme. The delimiter scanner
//! knows the markup characters; the plain text scanner knows everything else and falls back
//! to a one-character text token, so it matches any non-empty input.

use crate::markdown::token::{Token, TokenType};
use logos::Logos;

/// Strategy that recognizes a token at the front of a string
pub trait Scanner: Send + Sync {
    /// Returns the name of this scanner
    ///
    /// Names should be lowercase with underscores (e.g., "plain_text")
    fn name(&self) -> &str;

    /// Try to recognize a token at the start of `remaining`
    ///
    /// On success the token's length must equal the number of characters consumed from the
    /// front of `remaining`. Callers never pass an empty string.
    fn try_scan(&self, remaining: &str) -> Option<Token>;
}

/// Markup delimiters, one character each
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum Delimiter {
    #[token("_")]
    Underscore,

    #[token("\\")]
    Escape,
}

/// Plain content, split into digit runs and everything else
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum Plain {
    #[regex(r"[0-9]+")]
    Digits,

    #[regex(r"[^_\\0-9]+")]
    Run,
}

/// Pull the first lexeme of `source`, provided it starts at offset zero
fn first_lexeme<'s, T>(source: &'s str) -> Option<(T, &'s str)>
where
    T: Logos<'s, Source = str>,
    T::Extras: Default,
{
    let mut lexer = T::lexer(source);
    match lexer.next()? {
        Ok(lexeme) if lexer.span().start == 0 => Some((lexeme, lexer.slice())),
        _ => None,
    }
}

/// Recognizes `_` and `\`
#[derive(Debug, Default, Clone, Copy)]
pub struct DelimiterScanner;

impl Scanner for DelimiterScanner {
    fn name(&self) -> &str {
        "delimiter"
    }

    fn try_scan(&self, remaining: &str) -> Option<Token> {
        let (delimiter, slice) = first_lexeme::<Delimiter>(remaining)?;
        let kind = match delimiter {
            Delimiter::Underscore => TokenType::Underscore,
            Delimiter::Escape => TokenType::EscapeChar,
        };
        Some(Token::new(kind, slice))
    }
}

/// Recognizes digit runs and runs of ordinary text
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextScanner;

impl Scanner for PlainTextScanner {
    fn name(&self) -> &str {
        "plain_text"
    }

    fn try_scan(&self, remaining: &str) -> Option<Token> {
        match first_lexeme::<Plain>(remaining) {
            Some((Plain::Digits, slice)) => Some(Token::num(slice)),
            Some((Plain::Run, slice)) => Some(Token::text_run(slice)),
            // A delimiter nobody claimed is still text
            None => remaining
                .chars()
                .next()
                .map(|c| Token::text_run(c.to_string())),
        }
    }
}

/// The standard scanner list, delimiters first
pub fn default_scanners() -> Vec<Box<dyn Scanner>> {
    vec![Box::new(DelimiterScanner), Box::new(PlainTextScanner)]
}
