//! Fixed English sentences for move records.

use notation_core::move_data::{Annotation, CastlingKind, MoveKind, MoveRecord, PieceKind, Side};

/// Describe one classified move as a single sentence.
pub fn describe(record: &MoveRecord) -> String {
    let side = side_name(record.side);
    let mut sentence = match &record.kind {
        MoveKind::Castling(kind) => format!("{side} castles {}", castling_name(*kind)),
        MoveKind::Standard {
            piece,
            destination,
            capture,
        } => {
            let verb = if *capture { "captures on" } else { "moves to" };
            format!("{side} {} {verb} {destination}", piece_name(*piece))
        }
    };

    match record.annotation {
        Annotation::None => {}
        Annotation::Check => sentence.push_str(" (check)"),
        Annotation::Mate => sentence.push_str(" (checkmate)"),
    }

    sentence.push('.');
    sentence
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::White => "White",
        Side::Black => "Black",
    }
}

fn piece_name(piece: PieceKind) -> &'static str {
    match piece {
        PieceKind::King => "king",
        PieceKind::Queen => "queen",
        PieceKind::Rook => "rook",
        PieceKind::Bishop => "bishop",
        PieceKind::Knight => "knight",
        PieceKind::Pawn => "pawn",
    }
}

fn castling_name(kind: CastlingKind) -> &'static str {
    match kind {
        CastlingKind::Kingside => "kingside",
        CastlingKind::Queenside => "queenside",
    }
}
