//! Scan dispatch
//!
//! Tries each registered scanner, in registration order, against the remaining input and
//! returns the first token produced. When no scanner matches, which with the plain text
//! scanner registered only happens at the end of input, the end marker is returned instead.

use super::scanners::Scanner;
use crate::markdown::token::Token;
use tracing::trace;

/// Produce the next raw token from `remaining`
pub fn dispatch(scanners: &[Box<dyn Scanner>], remaining: &str) -> Token {
    if remaining.is_empty() {
        return Token::end_marker();
    }

    scanners
        .iter()
        .find_map(|scanner| {
            let token = scanner.try_scan(remaining)?;
            trace!(scanner = scanner.name(), %token, "scanned");
            Some(token)
        })
        .unwrap_or_else(Token::end_marker)
}
