//! Move grammar — lightweight regex-based tokenizer for SAN-like notation.

use regex::Regex;

use crate::error::NotationError;
use crate::move_data::{MoveToken, TokenKind};

/// Compiled move grammar: one pattern per alternative.
///
/// Immutable after construction; build once and share freely.
#[derive(Debug, Clone)]
pub struct Grammar {
    castling: Regex,
    standard: Regex,
}

impl Grammar {
    pub fn new() -> Self {
        let castling = Regex::new(r"^O-O(-O)?[+#]?$").unwrap();
        let standard = Regex::new(r"^[KQRBN]?x?[a-h][1-8][+#]?$").unwrap();
        Self { castling, standard }
    }

    /// Match one whitespace-free candidate in full against the grammar.
    /// Castling is tried first: `O` is reserved for castling.
    fn match_candidate(&self, text: &str) -> Option<TokenKind> {
        if self.castling.is_match(text) {
            Some(TokenKind::Castling)
        } else if self.standard.is_match(text) {
            Some(TokenKind::Standard)
        } else {
            None
        }
    }

    /// Split `input` on whitespace and match every candidate substring.
    ///
    /// All-or-nothing: any candidate outside the grammar fails the whole
    /// input with a `GrammarMismatch` listing every offender in input order,
    /// and no tokens are produced.
    pub fn tokenize(&self, input: &str) -> Result<Vec<MoveToken>, NotationError> {
        let mut tokens = Vec::new();
        let mut unmatched = Vec::new();

        for candidate in input.split_whitespace() {
            match self.match_candidate(candidate) {
                Some(kind) => tokens.push(MoveToken {
                    text: candidate.to_string(),
                    kind,
                }),
                None => unmatched.push(candidate.to_string()),
            }
        }

        if unmatched.is_empty() {
            Ok(tokens)
        } else {
            Err(NotationError::GrammarMismatch { unmatched })
        }
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokenize with a freshly built grammar.
pub fn tokenize(input: &str) -> Result<Vec<MoveToken>, NotationError> {
    Grammar::new().tokenize(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_piece_and_pawn_moves() {
        let tokens = tokenize("e4 e5 Nf3 Nc6 Bb5").unwrap();
        assert_eq!(tokens.len(), 5);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Standard));
        assert_eq!(tokens[2].text, "Nf3");
    }

    #[test]
    fn test_accepts_captures_and_annotations() {
        for text in ["Bxc4", "Qh5#", "Kxe2+", "exd5", "xd5", "d8#"] {
            let tokens = tokenize(text).unwrap();
            assert_eq!(tokens.len(), 1, "{text} should match");
            assert_eq!(tokens[0].text, text);
            assert_eq!(tokens[0].kind, TokenKind::Standard);
        }
    }

    #[test]
    fn test_castling_alternative_wins_for_o() {
        for text in ["O-O", "O-O-O", "O-O+", "O-O-O#"] {
            let tokens = tokenize(text).unwrap();
            assert_eq!(tokens.len(), 1, "{text} should match");
            assert_eq!(tokens[0].kind, TokenKind::Castling);
        }
    }

    #[test]
    fn test_rejects_out_of_range_squares() {
        for text in ["e9", "i4", "e0"] {
            let err = tokenize(text).unwrap_err();
            assert_eq!(
                err,
                NotationError::GrammarMismatch {
                    unmatched: vec![text.to_string()]
                }
            );
        }
    }

    #[test]
    fn test_case_sensitive() {
        // lowercase piece letters and uppercase files are not normalized
        assert!(tokenize("kf3").is_err());
        assert!(tokenize("NE4").is_err());
        assert!(tokenize("o-o").is_err());
    }

    #[test]
    fn test_rejects_leftover_characters() {
        assert!(tokenize("e44").is_err());
        assert!(tokenize("Nf3x").is_err());
        assert!(tokenize("O-O-O-O").is_err());
        assert!(tokenize("e4+#").is_err());
    }

    #[test]
    fn test_failure_collects_every_offender_in_order() {
        let err = tokenize("e4 e9 Nc6 zz O-O").unwrap_err();
        assert_eq!(
            err,
            NotationError::GrammarMismatch {
                unmatched: vec!["e9".to_string(), "zz".to_string()]
            }
        );
    }

    #[test]
    fn test_empty_input_is_zero_tokens() {
        assert_eq!(tokenize("").unwrap(), vec![]);
        assert_eq!(tokenize("   \t  ").unwrap(), vec![]);
    }

    #[test]
    fn test_error_display_joins_offenders() {
        let err = tokenize("e9 zz").unwrap_err();
        assert_eq!(err.to_string(), "unrecognized notation: e9, zz");
    }
}
