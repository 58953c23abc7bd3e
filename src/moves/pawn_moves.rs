//! Pawn targets.
//!
//! Pawns advance along the column axis: White towards higher columns, Black
//! towards lower ones. Both diagonals are "column + 1, row +/- 1" for either
//! color.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;

/// Diagonal capture offsets, identical for both colors.
pub const PAWN_DIAGONALS: [(i8, i8); 2] = [(1, 1), (1, -1)];

#[inline]
pub fn pawn_forward_square(color: Color, from: Square) -> Square {
    from.offset((color.pawn_forward(), 0))
}

#[inline]
pub fn pawn_diagonal_squares(from: Square) -> [Square; 2] {
    [from.offset(PAWN_DIAGONALS[0]), from.offset(PAWN_DIAGONALS[1])]
}

/// Straight advance onto an empty square, or diagonal step onto an enemy.
pub fn pawn_reaches(game_state: &GameState, from: Square, to: Square, mover: Color) -> bool {
    let Some(occupant) = game_state.piece_at(to) else {
        return false;
    };

    if to == pawn_forward_square(mover, from) && occupant.is_empty() {
        return true;
    }

    pawn_diagonal_squares(from).contains(&to) && occupant.color() == Some(mover.opposite())
}

/// Enhanced pawn: the same three squares, occupancy unchecked.
#[inline]
pub fn pawn_reaches_enhanced(from: Square, to: Square, mover: Color) -> bool {
    to == pawn_forward_square(mover, from) || pawn_diagonal_squares(from).contains(&to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Piece;

    #[test]
    fn forward_direction_depends_on_color() {
        let from = Square::new(3, 3);
        assert_eq!(pawn_forward_square(Color::White, from), Square::new(4, 3));
        assert_eq!(pawn_forward_square(Color::Black, from), Square::new(2, 3));
    }

    #[test]
    fn diagonals_point_to_higher_column_for_both_colors() {
        let from = Square::new(3, 3);
        let diagonals = pawn_diagonal_squares(from);
        assert_eq!(diagonals, [Square::new(4, 4), Square::new(4, 2)]);
    }

    #[test]
    fn diagonal_requires_enemy_straight_requires_empty() {
        let from = Square::new(2, 3);
        let mut game = GameState::empty(Color::White);
        game.set_piece(from, Piece::WHITE_PAWN).expect("on board");
        game.set_piece(Square::new(3, 4), Piece::BLACK_PAWN)
            .expect("on board");
        game.set_piece(Square::new(3, 3), Piece::BLACK_ROOK)
            .expect("on board");

        assert!(pawn_reaches(&game, from, Square::new(3, 4), Color::White));
        assert!(!pawn_reaches(&game, from, Square::new(3, 2), Color::White));
        assert!(!pawn_reaches(&game, from, Square::new(3, 3), Color::White));

        assert!(pawn_reaches_enhanced(from, Square::new(3, 3), Color::White));
        assert!(pawn_reaches_enhanced(from, Square::new(3, 2), Color::White));
        assert!(!pawn_reaches_enhanced(from, Square::new(1, 3), Color::White));
    }
}
