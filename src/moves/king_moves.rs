use crate::game_state::chess_types::Square;

/// Relative `(col, row)` steps a king can make.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

#[inline]
pub fn king_reaches(from: Square, to: Square) -> bool {
    KING_OFFSETS.iter().any(|&delta| from.offset(delta) == to)
}
