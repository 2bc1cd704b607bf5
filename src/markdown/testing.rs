//! Testing utilities
//!
//!     Helpers shared by the unit tests and the integration tests under `tests/`.
//!
//!     [factories] builds spanned token streams succinctly, so expected streams read as a
//!     table of (token, start, end) rows.
//!
//!     [scanners] holds scanners that misbehave or split input differently from the built-in
//!     ones. They exercise the tokenizer paths the standard scanners never reach: digit runs
//!     arriving in pieces, lengths past the end of input, zero progress.

pub mod factories {
    //! Test factories for creating locations and spanned tokens succinctly

    use std::ops::Range;

    use crate::markdown::lexing::SpannedTokens;
    use crate::markdown::token::Token;

    /// Make a byte range location
    pub fn make_loc(start: usize, end: usize) -> Range<usize> {
        start..end
    }

    /// Make a single spanned token
    pub fn mk_token(token: Token, start: usize, end: usize) -> (Token, Range<usize>) {
        (token, make_loc(start, end))
    }

    /// Make a vector of spanned tokens from a list of (Token, start, end)
    pub fn mk_tokens(specs: &[(Token, usize, usize)]) -> SpannedTokens {
        specs
            .iter()
            .cloned()
            .map(|(t, s, e)| mk_token(t, s, e))
            .collect()
    }
}

pub mod scanners {
    use crate::markdown::lexing::Scanner;
    use crate::markdown::token::Token;

    /// Emits one `Num` token per ASCII digit
    #[derive(Debug, Default, Clone, Copy)]
    pub struct SingleDigitScanner;

    impl Scanner for SingleDigitScanner {
        fn name(&self) -> &str {
            "single_digit"
        }

        fn try_scan(&self, remaining: &str) -> Option<Token> {
            let first = remaining.chars().next()?;
            first
                .is_ascii_digit()
                .then(|| Token::num(first.to_string()))
        }
    }

    /// Claims one character more than is left
    #[derive(Debug, Default, Clone, Copy)]
    pub struct OverrunScanner;

    impl Scanner for OverrunScanner {
        fn name(&self) -> &str {
            "overrun"
        }

        fn try_scan(&self, remaining: &str) -> Option<Token> {
            Some(Token::text_run(format!("{}!", remaining)))
        }
    }

    /// Matches without consuming anything
    #[derive(Debug, Default, Clone, Copy)]
    pub struct StallingScanner;

    impl Scanner for StallingScanner {
        fn name(&self) -> &str {
            "stalling"
        }

        fn try_scan(&self, _remaining: &str) -> Option<Token> {
            Some(Token::text_run(""))
        }
    }
}
