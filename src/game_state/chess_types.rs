//! Value types shared by the state model, pattern tables, and legality checks.

use std::fmt;

use crate::game_state::chess_rules::{BOARD_COLS, BOARD_ROWS};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Column delta of a straight pawn advance for this side.
    #[inline]
    pub const fn pawn_forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind. There is no queen in this variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    King,
}

/// Occupant of a single cell. `Empty` is a valid occupant, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    #[default]
    Empty,
    Occupied(Color, PieceKind),
}

impl Piece {
    pub const WHITE_PAWN: Piece = Piece::Occupied(Color::White, PieceKind::Pawn);
    pub const WHITE_KNIGHT: Piece = Piece::Occupied(Color::White, PieceKind::Knight);
    pub const WHITE_BISHOP: Piece = Piece::Occupied(Color::White, PieceKind::Bishop);
    pub const WHITE_ROOK: Piece = Piece::Occupied(Color::White, PieceKind::Rook);
    pub const WHITE_KING: Piece = Piece::Occupied(Color::White, PieceKind::King);
    pub const BLACK_PAWN: Piece = Piece::Occupied(Color::Black, PieceKind::Pawn);
    pub const BLACK_KNIGHT: Piece = Piece::Occupied(Color::Black, PieceKind::Knight);
    pub const BLACK_BISHOP: Piece = Piece::Occupied(Color::Black, PieceKind::Bishop);
    pub const BLACK_ROOK: Piece = Piece::Occupied(Color::Black, PieceKind::Rook);
    pub const BLACK_KING: Piece = Piece::Occupied(Color::Black, PieceKind::King);

    /// Color of the occupant, or `None` for an empty cell.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Piece::Empty => None,
            Piece::Occupied(color, _) => Some(color),
        }
    }

    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            Piece::Empty => None,
            Piece::Occupied(_, kind) => Some(kind),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::Empty => write!(f, "empty"),
            Piece::Occupied(color, kind) => write!(f, "{color} {kind:?}"),
        }
    }
}

/// Board coordinate. Signed so that off-board claims stay representable and
/// can be rejected instead of wrapping around silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub col: i8,
    pub row: i8,
}

impl Square {
    #[inline]
    pub const fn new(col: i8, row: i8) -> Self {
        Self { col, row }
    }

    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.col >= 0
            && (self.col as usize) < BOARD_COLS
            && self.row >= 0
            && (self.row as usize) < BOARD_ROWS
    }

    /// Plain vector addition; the result may be off-board.
    #[inline]
    pub const fn offset(self, delta: (i8, i8)) -> Self {
        Self {
            col: self.col.wrapping_add(delta.0),
            row: self.row.wrapping_add(delta.1),
        }
    }

    /// Vector addition folded back onto the board along both axes.
    #[inline]
    pub const fn offset_wrapping(self, delta: (i8, i8)) -> Self {
        let cols = BOARD_COLS as i8;
        let rows = BOARD_ROWS as i8;
        Self {
            col: (self.col + delta.0).rem_euclid(cols),
            row: (self.row + delta.1).rem_euclid(rows),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Whether a move spends an enhancement charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Enhancement {
    #[default]
    Unenhanced,
    Enhanced,
}

/// Compact castling rights bitmask. Tracked but not consulted by any rule yet.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_piece_has_no_color() {
        assert_eq!(Piece::Empty.color(), None);
        assert_eq!(Piece::WHITE_PAWN.color(), Some(Color::White));
        assert_eq!(Piece::BLACK_KING.color(), Some(Color::Black));
    }

    #[test]
    fn wrapping_offset_crosses_both_edges() {
        assert_eq!(Square::new(6, 6).offset_wrapping((1, 1)), Square::new(0, 0));
        assert_eq!(Square::new(0, 3).offset_wrapping((-1, 1)), Square::new(6, 4));
    }

    #[test]
    fn bounds_reject_negative_and_seventh_index() {
        assert!(Square::new(0, 0).in_bounds());
        assert!(Square::new(6, 6).in_bounds());
        assert!(!Square::new(7, 0).in_bounds());
        assert!(!Square::new(0, -1).in_bounds());
    }
}
