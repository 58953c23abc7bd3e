//! Capabilities the rules core exposes as interfaces but does not implement.
//!
//! Listing legal moves, enumerating threatened squares, and parsing move text
//! belong to components built on top of `check_move_legality`. The `Null*`
//! implementations let hosts wire the seams before those components exist.

use crate::chess_errors::{CapabilityError, CapabilityResult};
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> CapabilityResult<Vec<Move>>;
}

pub trait ThreatInspector: Send + Sync {
    /// Squares `attacker` could capture on if it were to move.
    fn threatened_squares(
        &self,
        game_state: &GameState,
        attacker: Color,
    ) -> CapabilityResult<Vec<Square>>;
}

pub trait MoveParser: Send + Sync {
    fn parse_move(&self, game_state: &GameState, text: &str) -> CapabilityResult<Move>;
}

pub struct NullMoveGenerator;

impl MoveGenerator for NullMoveGenerator {
    fn generate_legal_moves(&self, _game_state: &GameState) -> CapabilityResult<Vec<Move>> {
        Err(CapabilityError::NotImplemented("legal move generation"))
    }
}

pub struct NullThreatInspector;

impl ThreatInspector for NullThreatInspector {
    fn threatened_squares(
        &self,
        _game_state: &GameState,
        _attacker: Color,
    ) -> CapabilityResult<Vec<Square>> {
        Err(CapabilityError::NotImplemented("threatened-square enumeration"))
    }
}

pub struct NullMoveParser;

impl MoveParser for NullMoveParser {
    fn parse_move(&self, _game_state: &GameState, _text: &str) -> CapabilityResult<Move> {
        Err(CapabilityError::NotImplemented("move parsing"))
    }
}
