use crate::chess_errors::InvariantViolation;
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::moves::slide_moves::{slide_reaches, wrapping_slide_reaches};

/// Diagonal unit directions as `(col, row)`.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

#[inline]
pub fn bishop_reaches(game_state: &GameState, from: Square, to: Square, mover: Color) -> bool {
    slide_reaches(game_state, from, to, mover, &BISHOP_DIRECTIONS)
}

/// Enhanced bishop: the diagonals wrap around the board edges.
#[inline]
pub fn bishop_reaches_enhanced(
    game_state: &GameState,
    from: Square,
    to: Square,
    mover: Color,
    iteration_cap: usize,
) -> Result<bool, InvariantViolation> {
    wrapping_slide_reaches(game_state, from, to, mover, &BISHOP_DIRECTIONS, iteration_cap)
}
