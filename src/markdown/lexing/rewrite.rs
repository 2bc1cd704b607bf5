//! Rewrite rules
//!
//! Local corrections applied while the token stream is being built. Each rule looks at the
//! candidate token about to be appended and at most two tokens already emitted.
//!
//! Absorbing rules replace the candidate with a synthetic token and take the previous token
//! out of the stream. They are tried in this order and the first match wins:
//!
//!     1. DoubleUnderscore: `_` after `_` becomes `__`
//!     2. ConsecutiveNumbers: a digit run after a digit run becomes one digit run
//!     3. EscapedToken: an escapable token after `\` becomes plain text
//!
//! The demoting rule runs afterwards, on the stream as the absorbing step left it:
//!
//!     4. UnderscoreBetweenDigits: an underscore between two digit runs is plain text
//!
//! All rules are pure: no match simply means the stream is left alone.

use crate::markdown::token::{Token, TokenType};

/// The rewrite rules, in the order they are evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteRule {
    DoubleUnderscore,
    ConsecutiveNumbers,
    EscapedToken,
    UnderscoreBetweenDigits,
}

/// Rules that absorb the previous token into the candidate, by precedence
pub const ABSORBING_RULES: [RewriteRule; 3] = [
    RewriteRule::DoubleUnderscore,
    RewriteRule::ConsecutiveNumbers,
    RewriteRule::EscapedToken,
];

impl RewriteRule {
    pub fn name(&self) -> &'static str {
        match self {
            RewriteRule::DoubleUnderscore => "double_underscore",
            RewriteRule::ConsecutiveNumbers => "consecutive_numbers",
            RewriteRule::EscapedToken => "escaped_token",
            RewriteRule::UnderscoreBetweenDigits => "underscore_between_digits",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RewriteRule::DoubleUnderscore => "merges two adjacent underscores into one token",
            RewriteRule::ConsecutiveNumbers => "merges adjacent digit runs",
            RewriteRule::EscapedToken => "turns an escaped delimiter into plain text",
            RewriteRule::UnderscoreBetweenDigits => {
                "demotes an underscore flanked by digit runs to plain text"
            }
        }
    }

    /// Whether a match replaces the previous token with the candidate (absorbing) rather
    /// than rewriting the previous token in place
    pub fn absorbs_previous(&self) -> bool {
        !matches!(self, RewriteRule::UnderscoreBetweenDigits)
    }

    /// Evaluate this rule
    ///
    /// `previous` is the last emitted token and `penultimate` the one before it. Absorbing
    /// rules return the token that replaces both `previous` and the candidate. The demoting
    /// rule returns the replacement for `previous`.
    pub fn apply(
        &self,
        candidate: &Token,
        previous: &Token,
        penultimate: Option<&Token>,
    ) -> Option<Token> {
        match self {
            RewriteRule::DoubleUnderscore => merge_double_underscore(candidate, previous),
            RewriteRule::ConsecutiveNumbers => merge_consecutive_numbers(candidate, previous),
            RewriteRule::EscapedToken => neutralize_escaped(candidate, previous),
            RewriteRule::UnderscoreBetweenDigits => {
                demote_underscore_between_digits(candidate, previous, penultimate?)
            }
        }
    }
}

/// Run the absorbing rules in order and return the first match
pub fn absorb(candidate: &Token, previous: &Token) -> Option<(RewriteRule, Token)> {
    ABSORBING_RULES
        .iter()
        .find_map(|rule| Some((*rule, rule.apply(candidate, previous, None)?)))
}

pub fn merge_double_underscore(candidate: &Token, previous: &Token) -> Option<Token> {
    (candidate.kind() == TokenType::Underscore && previous.kind() == TokenType::Underscore)
        .then(Token::double_underscore)
}

pub fn merge_consecutive_numbers(candidate: &Token, previous: &Token) -> Option<Token> {
    if candidate.kind() == TokenType::Num && previous.kind() == TokenType::Num {
        Some(Token::num(format!("{}{}", previous.text(), candidate.text())))
    } else {
        None
    }
}

pub fn neutralize_escaped(candidate: &Token, previous: &Token) -> Option<Token> {
    (previous.kind() == TokenType::EscapeChar && candidate.kind().is_escapable())
        .then(|| Token::text_run(candidate.text()))
}

pub fn demote_underscore_between_digits(
    candidate: &Token,
    previous: &Token,
    penultimate: &Token,
) -> Option<Token> {
    (candidate.kind() == TokenType::Num
        && previous.kind().is_underscore()
        && penultimate.kind() == TokenType::Num)
        .then(|| Token::text_run(previous.text()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_double_underscore() {
        assert_eq!(
            merge_double_underscore(&Token::underscore(), &Token::underscore()),
            Some(Token::double_underscore())
        );
        assert_eq!(
            merge_double_underscore(&Token::underscore(), &Token::double_underscore()),
            None
        );
        assert_eq!(
            merge_double_underscore(&Token::text_run("_"), &Token::underscore()),
            None
        );
    }

    #[test]
    fn test_consecutive_numbers_keep_order() {
        assert_eq!(
            merge_consecutive_numbers(&Token::num("3"), &Token::num("12")),
            Some(Token::num("123"))
        );
        assert_eq!(
            merge_consecutive_numbers(&Token::num("3"), &Token::text_run("12")),
            None
        );
    }

    #[rstest(
        candidate,
        case(Token::underscore()),
        case(Token::double_underscore()),
        case(Token::escape_char())
    )]
    fn test_escape_neutralizes(candidate: Token) {
        let neutralized = neutralize_escaped(&candidate, &Token::escape_char()).unwrap();
        assert_eq!(neutralized.kind(), TokenType::Text);
        assert_eq!(neutralized.text(), candidate.text());
    }

    #[rstest(candidate, case(Token::num("1")), case(Token::text_run("a")))]
    fn test_escape_ignores_plain_tokens(candidate: Token) {
        assert_eq!(neutralize_escaped(&candidate, &Token::escape_char()), None);
    }

    #[rstest(
        previous,
        expected,
        case(Token::underscore(), Some(Token::text_run("_"))),
        case(Token::double_underscore(), Some(Token::text_run("__"))),
        case(Token::text_run("-"), None),
        case(Token::escape_char(), None)
    )]
    fn test_underscore_between_digits(previous: Token, expected: Option<Token>) {
        assert_eq!(
            demote_underscore_between_digits(&Token::num("2"), &previous, &Token::num("1")),
            expected
        );
    }

    #[test]
    fn test_underscore_between_digits_needs_digits_on_both_sides() {
        let underscore = Token::underscore();
        assert_eq!(
            demote_underscore_between_digits(&Token::text_run("a"), &underscore, &Token::num("1")),
            None
        );
        assert_eq!(
            demote_underscore_between_digits(&Token::num("2"), &underscore, &Token::text_run("a")),
            None
        );
    }

    #[test]
    fn test_absorb_precedence() {
        assert_eq!(
            absorb(&Token::underscore(), &Token::underscore()),
            Some((RewriteRule::DoubleUnderscore, Token::double_underscore()))
        );
        assert_eq!(
            absorb(&Token::num("9"), &Token::num("9")),
            Some((RewriteRule::ConsecutiveNumbers, Token::num("99")))
        );
        assert_eq!(
            absorb(&Token::underscore(), &Token::escape_char()),
            Some((RewriteRule::EscapedToken, Token::text_run("_")))
        );
        assert_eq!(absorb(&Token::text_run("a"), &Token::underscore()), None);
    }

    #[test]
    fn test_demoting_rule_needs_penultimate() {
        let rule = RewriteRule::UnderscoreBetweenDigits;
        assert!(!rule.absorbs_previous());
        assert_eq!(rule.apply(&Token::num("2"), &Token::underscore(), None), None);
        assert_eq!(
            rule.apply(&Token::num("2"), &Token::underscore(), Some(&Token::num("1"))),
            Some(Token::text_run("_"))
        );
    }

    #[test]
    fn test_rule_metadata() {
        for rule in ABSORBING_RULES {
            assert!(rule.absorbs_previous());
            assert!(!rule.name().is_empty());
            assert!(!rule.description().is_empty());
        }
    }
}
