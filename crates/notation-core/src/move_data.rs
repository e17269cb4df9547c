use serde::{Deserialize, Serialize};

/// Which grammar alternative matched a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    Standard,
    Castling,
}

/// One move substring recognized by the grammar, exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveToken {
    pub text: String, // 2-6 chars, e.g. "e4", "Bxc4+", "O-O-O"
    pub kind: TokenKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CastlingKind {
    Kingside,
    Queenside,
}

/// Trailing `+`/`#` marker on a move, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Annotation {
    None,
    Check,
    Mate,
}

/// What the move does, split by grammar alternative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoveKind {
    Standard {
        piece: PieceKind,
        destination: String, // file + rank, e.g. "e4"
        capture: bool,
    },
    Castling(CastlingKind),
}

/// The classified form of one move token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub index: usize,
    pub side: Side,
    pub kind: MoveKind,
    pub annotation: Annotation,
}
