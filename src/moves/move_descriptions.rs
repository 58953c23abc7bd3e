//! The move claim submitted for validation.
//!
//! A `Move` records what the caller *believes* about the board: which pieces
//! sit on the source and destination. The checker re-reads the board and
//! rejects the claim when those beliefs are stale.

use std::fmt;

use crate::game_state::chess_types::{Enhancement, Piece, Square};
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub from_piece: Piece,
    pub to_piece: Piece,
    pub enhancement: Enhancement,
    /// Reserved. No promotion rule exists; the value is carried, never read.
    pub promotion: Option<Piece>,
}

impl Move {
    #[inline]
    pub fn new(from: Square, to: Square, from_piece: Piece, to_piece: Piece) -> Self {
        Self {
            from,
            to,
            from_piece,
            to_piece,
            enhancement: Enhancement::Unenhanced,
            promotion: None,
        }
    }

    /// Build a claim whose piece fields are read from `game_state`.
    ///
    /// Off-board squares are claimed as empty; the checker rejects them on
    /// bounds before the claim is compared.
    pub fn claim(game_state: &GameState, from: Square, to: Square) -> Self {
        Self::new(
            from,
            to,
            game_state.piece_at(from).unwrap_or_default(),
            game_state.piece_at(to).unwrap_or_default(),
        )
    }

    #[inline]
    pub fn enhanced(mut self) -> Self {
        self.enhancement = Enhancement::Enhanced;
        self
    }

    #[inline]
    pub fn with_promotion(mut self, piece: Piece) -> Self {
        self.promotion = Some(piece);
        self
    }

    #[inline]
    pub fn is_enhanced(&self) -> bool {
        self.enhancement == Enhancement::Enhanced
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.from_piece, self.from, self.to)?;
        if !self.to_piece.is_empty() {
            write!(f, " x {}", self.to_piece)?;
        }
        if self.is_enhanced() {
            write!(f, " [enhanced]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::game_state::chess_types::{Enhancement, Piece, Square};
    use crate::game_state::game_state::GameState;

    #[test]
    fn claim_reads_occupants_from_the_board() {
        let game = GameState::new_game();
        let mv = Move::claim(&game, Square::new(1, 0), Square::new(2, 2));
        assert_eq!(mv.from_piece, Piece::WHITE_KNIGHT);
        assert_eq!(mv.to_piece, Piece::Empty);
        assert_eq!(mv.enhancement, Enhancement::Unenhanced);
        assert_eq!(mv.promotion, None);
    }

    #[test]
    fn off_board_claims_read_as_empty() {
        let game = GameState::new_game();
        let mv = Move::claim(&game, Square::new(-1, 0), Square::new(7, 7)).enhanced();
        assert_eq!(mv.from_piece, Piece::Empty);
        assert_eq!(mv.to_piece, Piece::Empty);
        assert!(mv.is_enhanced());
    }
}
