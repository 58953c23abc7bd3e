use crate::game_state::chess_types::Square;

/// Relative `(col, row)` jumps a knight can make.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (-2, 1),
    (-2, -1),
    (2, -1),
    (1, 2),
    (-1, 2),
    (-1, -2),
    (1, -2),
];

/// True when `to` is exactly one knight jump from `from`. Occupancy is not
/// consulted; enhanced knights use the same table.
#[inline]
pub fn knight_reaches(from: Square, to: Square) -> bool {
    KNIGHT_OFFSETS.iter().any(|&delta| from.offset(delta) == to)
}

/// On-board knight targets from `from`.
pub fn knight_targets(from: Square) -> Vec<Square> {
    KNIGHT_OFFSETS
        .iter()
        .map(|&delta| from.offset(delta))
        .filter(|sq| sq.in_bounds())
        .collect()
}
