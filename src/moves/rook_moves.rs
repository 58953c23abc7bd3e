use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::moves::slide_moves::{slide_reaches, slide_reaches_unblocked};

/// Orthogonal unit directions as `(col, row)`.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, -1), (0, 1), (1, 0), (-1, 0)];

/// Normal rook: blocked by the first occupied square.
#[inline]
pub fn rook_reaches(game_state: &GameState, from: Square, to: Square, mover: Color) -> bool {
    slide_reaches(game_state, from, to, mover, &ROOK_DIRECTIONS)
}

/// Enhanced rook: any square sharing a row or column with `from`,
/// regardless of what stands in between.
#[inline]
pub fn rook_reaches_enhanced(from: Square, to: Square) -> bool {
    slide_reaches_unblocked(from, to, &ROOK_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::{rook_reaches, rook_reaches_enhanced};
    use crate::game_state::chess_types::{Color, Piece, Square};
    use crate::game_state::game_state::GameState;

    #[test]
    fn rook_stops_before_friendly_piece() {
        let game = GameState::new_game();
        // corner rook is boxed in by its own pawn and knight
        assert!(!rook_reaches(&game, Square::new(0, 0), Square::new(0, 2), Color::White));
        assert!(!rook_reaches(&game, Square::new(0, 0), Square::new(2, 0), Color::White));
    }

    #[test]
    fn rook_travels_open_row() {
        let mut game = GameState::empty(Color::White);
        game.set_piece(Square::new(3, 2), Piece::WHITE_ROOK)
            .expect("on board");
        assert!(rook_reaches(&game, Square::new(3, 2), Square::new(3, 6), Color::White));
        assert!(rook_reaches(&game, Square::new(3, 2), Square::new(0, 2), Color::White));
        assert!(!rook_reaches(&game, Square::new(3, 2), Square::new(4, 3), Color::White));
    }

    #[test]
    fn enhanced_rook_ignores_the_wall() {
        assert!(rook_reaches_enhanced(Square::new(0, 0), Square::new(0, 5)));
        assert!(!rook_reaches_enhanced(Square::new(0, 0), Square::new(1, 1)));
    }
}
