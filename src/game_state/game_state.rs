//! Authoritative board state.
//!
//! `GameState` owns the 7x7 grid, the side to move, both enhancement pools,
//! the (reserved) castling rights, and the append-only move history. It is a
//! plain owned value: a game session holds one and is the only writer. Sharing
//! it across threads is the embedding application's business.

use crate::chess_errors::MoveRejection;
use crate::game_state::chess_rules::{Grid, BOARD_COLS, BOARD_ROWS, STARTING_LAYOUT};
use crate::game_state::chess_types::*;
use crate::game_state::rules_config::RulesConfig;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    side_to_move: Color,
    // [white, black]
    enhancement_charges: [u32; 2],
    castling_rights: CastlingRights,
    history: Vec<Move>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::empty(Color::White)
    }
}

impl GameState {
    /// Starting position with default rules.
    #[inline]
    pub fn new_game() -> Self {
        Self::new_game_with_config(&RulesConfig::default())
    }

    pub fn new_game_with_config(config: &RulesConfig) -> Self {
        Self {
            grid: STARTING_LAYOUT,
            side_to_move: Color::White,
            enhancement_charges: [config.starting_enhancement_charges; 2],
            castling_rights: CASTLE_ALL,
            history: Vec::new(),
        }
    }

    /// Board with no pieces, no charges, and no castling rights.
    pub fn empty(side_to_move: Color) -> Self {
        Self {
            grid: [[Piece::Empty; BOARD_COLS]; BOARD_ROWS],
            side_to_move,
            enhancement_charges: [0; 2],
            castling_rights: 0,
            history: Vec::new(),
        }
    }

    /// Occupant of `square`, or `None` when the square is off the board.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !square.in_bounds() {
            return None;
        }
        Some(self.grid[square.row as usize][square.col as usize])
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn enhancement_charges_for(&self, color: Color) -> u32 {
        self.enhancement_charges[color.index()]
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn set_piece(&mut self, square: Square, piece: Piece) -> Result<(), MoveRejection> {
        if !square.in_bounds() {
            return Err(MoveRejection::OutOfBounds(square));
        }
        self.grid[square.row as usize][square.col as usize] = piece;
        Ok(())
    }

    pub fn set_turn(&mut self, color: Color) {
        self.side_to_move = color;
    }

    pub fn set_enhancement_charges(&mut self, color: Color, charges: u32) {
        self.enhancement_charges[color.index()] = charges;
    }

    /// Add charges to `color`'s pool, saturating at `u32::MAX`.
    pub fn grant_enhancement_charges(&mut self, color: Color, charges: u32) {
        let pool = &mut self.enhancement_charges[color.index()];
        *pool = pool.saturating_add(charges);
    }

    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.castling_rights = rights;
    }

    /// Count of `piece` on the board.
    pub fn count_pieces(&self, piece: Piece) -> usize {
        self.grid
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&p| p == piece)
            .count()
    }

    // Mutators used by move application only.

    pub(crate) fn spend_enhancement_charge(&mut self, color: Color) {
        let pool = &mut self.enhancement_charges[color.index()];
        *pool = pool.saturating_sub(1);
    }

    pub(crate) fn clear_castling_rights(&mut self, rights: CastlingRights) {
        self.castling_rights &= !rights;
    }

    pub(crate) fn pass_turn(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }

    pub(crate) fn push_history(&mut self, mv: Move) {
        self.history.push(mv);
    }
}
