//! Canonical Sajcredez rule constants.
//!
//! Board dimensions, the starting layout, and the iteration bound used by the
//! wrapping bishop slide live here so every other module reads the same values.

use crate::game_state::chess_types::Piece;

/// Number of columns on the board.
pub const BOARD_COLS: usize = 7;
/// Number of rows on the board.
pub const BOARD_ROWS: usize = 7;
/// Total number of cells.
pub const BOARD_CELLS: usize = BOARD_COLS * BOARD_ROWS;

/// Upper bound on steps taken by a toroidal slide before it is treated as a bug.
pub const WRAP_SLIDE_ITERATION_CAP: usize = BOARD_CELLS;

/// Grid layout, indexed `[row][col]`.
pub type Grid = [[Piece; BOARD_COLS]; BOARD_ROWS];

const E: Piece = Piece::Empty;

/// Starting position. White's back row is row 0, Black's is row 6.
pub const STARTING_LAYOUT: Grid = [
    [
        Piece::WHITE_ROOK,
        Piece::WHITE_KNIGHT,
        Piece::WHITE_BISHOP,
        Piece::WHITE_KING,
        Piece::WHITE_BISHOP,
        Piece::WHITE_KNIGHT,
        Piece::WHITE_ROOK,
    ],
    [Piece::WHITE_PAWN; BOARD_COLS],
    [E; BOARD_COLS],
    [E; BOARD_COLS],
    [E; BOARD_COLS],
    [Piece::BLACK_PAWN; BOARD_COLS],
    [
        Piece::BLACK_ROOK,
        Piece::BLACK_KNIGHT,
        Piece::BLACK_BISHOP,
        Piece::BLACK_KING,
        Piece::BLACK_BISHOP,
        Piece::BLACK_KNIGHT,
        Piece::BLACK_ROOK,
    ],
];

/// Column holding the queen-side rooks.
pub const QUEEN_SIDE_ROOK_COL: i8 = 0;
/// Column holding the king-side rooks.
pub const KING_SIDE_ROOK_COL: i8 = (BOARD_COLS - 1) as i8;
