//! Notation error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// One or more input substrings matched neither grammar alternative.
    /// Carries every offender, in input order.
    #[error("unrecognized notation: {}", unmatched.join(", "))]
    GrammarMismatch { unmatched: Vec<String> },
}
