//! Move classification: one token plus its sequence index to a move record.
//!
//! Works on token text alone — no board state, no history. Total over
//! grammar-accepted tokens; never fails.

use crate::move_data::{
    Annotation, CastlingKind, MoveKind, MoveRecord, MoveToken, PieceKind, Side, TokenKind,
};

/// Classify one token at its zero-based position in the move sequence.
pub fn classify(token: &MoveToken, index: usize) -> MoveRecord {
    let side = if index % 2 == 0 {
        Side::White
    } else {
        Side::Black
    };

    let kind = match token.kind {
        TokenKind::Castling => MoveKind::Castling(castling_kind(&token.text)),
        TokenKind::Standard => MoveKind::Standard {
            piece: piece_kind(&token.text),
            destination: destination(&token.text),
            capture: token.text.contains('x'),
        },
    };

    MoveRecord {
        index,
        side,
        kind,
        annotation: annotation(&token.text),
    }
}

fn castling_kind(text: &str) -> CastlingKind {
    if strip_annotation(text) == "O-O-O" {
        CastlingKind::Queenside
    } else {
        CastlingKind::Kingside
    }
}

fn piece_kind(text: &str) -> PieceKind {
    match text.chars().next() {
        Some('K') => PieceKind::King,
        Some('Q') => PieceKind::Queen,
        Some('R') => PieceKind::Rook,
        Some('N') => PieceKind::Knight,
        Some('B') => PieceKind::Bishop,
        // anything else is a file letter or capture marker
        _ => PieceKind::Pawn,
    }
}

/// Last two characters of the annotation-stripped text, so `Qh5#` gives `h5`.
/// Shorter text comes back verbatim rather than failing.
fn destination(text: &str) -> String {
    let body = strip_annotation(text);
    match body.char_indices().nth_back(1) {
        Some((i, _)) => body[i..].to_string(),
        None => body.to_string(),
    }
}

fn annotation(text: &str) -> Annotation {
    if text.ends_with('#') {
        Annotation::Mate
    } else if text.ends_with('+') {
        Annotation::Check
    } else {
        Annotation::None
    }
}

fn strip_annotation(text: &str) -> &str {
    text.trim_end_matches(|c| c == '+' || c == '#')
}
