//! Token stream builder
//!
//! Drives the tokenizing loop: dispatch a raw token, run the rewrite rules against the tail
//! of the stream, append, advance. The cursor always moves by the length of the raw token
//! the scanner consumed, never by the length of a merged token, so merges cannot skip input.
//!
//! A scanner that reports a length longer than the remaining input, or that makes no
//! progress, stops the loop. The tokens emitted so far are returned.

use super::dispatch::dispatch;
use super::rewrite::{self, RewriteRule};
use super::scanners::{default_scanners, Scanner};
use super::SpannedTokens;
use crate::markdown::token::Token;
use std::fmt;
use tracing::{debug, trace};

/// Builds corrected token streams from source text
pub struct Tokenizer {
    scanners: Vec<Box<dyn Scanner>>,
}

impl Tokenizer {
    /// Tokenizer with the standard scanners: delimiters first, then plain text
    pub fn new() -> Self {
        Tokenizer {
            scanners: default_scanners(),
        }
    }

    /// Tokenizer with a custom, ordered scanner list
    pub fn with_scanners(scanners: Vec<Box<dyn Scanner>>) -> Self {
        Tokenizer { scanners }
    }

    /// Produce the next raw token from the remaining input
    pub fn next_token(&self, remaining: &str) -> Token {
        dispatch(&self.scanners, remaining)
    }

    /// Tokenize `source`, dropping spans
    pub fn tokenize(&self, source: &str) -> Vec<Token> {
        self.tokenize_spanned(source)
            .into_iter()
            .map(|(token, _)| token)
            .collect()
    }

    /// Tokenize `source`, pairing every token with the byte range it covers
    pub fn tokenize_spanned(&self, source: &str) -> SpannedTokens {
        let mut tokens: SpannedTokens = Vec::new();
        let mut offset = 0;

        loop {
            let remaining = &source[offset..];
            let raw = self.next_token(remaining);
            let consumed = raw.len();
            let end = byte_len_of_chars(remaining, consumed).map(|len| offset + len);

            let mut span = offset..end.unwrap_or(source.len());
            let mut candidate = raw;

            let absorbed = tokens.last().and_then(|(previous, previous_span)| {
                let (rule, merged) = rewrite::absorb(&candidate, previous)?;
                Some((rule, merged, previous_span.start))
            });
            if let Some((rule, merged, start)) = absorbed {
                trace!(rule = rule.name(), from = %candidate, to = %merged, "rewrite");
                tokens.pop();
                candidate = merged;
                span.start = start;
            }

            let demoted = match tokens.as_slice() {
                [.., (penultimate, _), (previous, _)] => {
                    let rule = RewriteRule::UnderscoreBetweenDigits;
                    rule.apply(&candidate, previous, Some(penultimate))
                        .inspect(|demoted| {
                            trace!(rule = rule.name(), from = %previous, to = %demoted, "rewrite")
                        })
                }
                _ => None,
            };
            if let (Some(demoted), Some(last)) = (demoted, tokens.last_mut()) {
                last.0 = demoted;
            }

            let done = candidate.is_end_marker();
            trace!(token = %candidate, ?span, "emit");
            tokens.push((candidate, span));

            let Some(next) = end else {
                debug!(offset, consumed, "token overruns the input, stopping");
                break;
            };
            if done {
                break;
            }
            if next == offset {
                debug!(offset, "scanner made no progress, stopping");
                break;
            }
            offset = next;
        }

        if matches!(tokens.last(), Some((token, _)) if token.is_end_marker()) {
            tokens.pop();
        }

        debug!(
            tokens = tokens.len(),
            bytes = source.len(),
            "tokenized source"
        );
        tokens
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.scanners.iter().map(|scanner| scanner.name()))
            .finish()
    }
}

/// Byte length of the first `chars` characters of `s`, or None if `s` is shorter
fn byte_len_of_chars(s: &str, chars: usize) -> Option<usize> {
    if chars == 0 {
        return Some(0);
    }
    s.char_indices()
        .map(|(index, c)| index + c.len_utf8())
        .nth(chars - 1)
}
