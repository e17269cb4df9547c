//! Chess notation interpretation pipeline.
//!
//! Recognizes SAN-like move tokens in a raw string and classifies each one
//! into a structured record: side to move, piece, destination square,
//! capture flag, check/mate annotation, castling kind. Notation-level only —
//! no board state is tracked and move legality is never checked.
//! The main entry point is `read_moves()`.

pub mod classify;
pub mod error;
pub mod grammar;
pub mod move_data;

use crate::error::NotationError;
use crate::grammar::Grammar;
use crate::move_data::MoveRecord;

/// Tokenize `input` and classify every token, in input order.
///
/// Fails as a unit: a single unrecognized substring yields a
/// `GrammarMismatch` naming every offender and zero records.
pub fn read_moves(input: &str) -> Result<Vec<MoveRecord>, NotationError> {
    let grammar = Grammar::new();
    let tokens = grammar.tokenize(input)?;
    Ok(tokens
        .iter()
        .enumerate()
        .map(|(index, token)| classify::classify(token, index))
        .collect())
}
