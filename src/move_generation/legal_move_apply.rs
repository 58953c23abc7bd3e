//! Applying validated moves.
//!
//! `apply_move` runs the legality check and returns the successor state; the
//! input state is left untouched. `apply_move_unchecked` skips the rule checks
//! for trusted callers (engines, replay) but still refuses off-board squares
//! and empty sources.

use crate::chess_errors::{InvariantViolation, LegalityResult, MoveRejection};
use crate::game_state::chess_rules::{KING_SIDE_ROOK_COL, QUEEN_SIDE_ROOK_COL};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::game_state::rules_config::RulesConfig;
use crate::move_generation::legal_move_checks::check_move_legality_with_config;
use crate::moves::move_descriptions::Move;
use crate::utils::diagnostics::{emit, DiagnosticLevel};

#[inline]
pub fn apply_move(game_state: &GameState, mv: &Move) -> LegalityResult<GameState> {
    apply_move_with_config(game_state, mv, &RulesConfig::default())
}

pub fn apply_move_with_config(
    game_state: &GameState,
    mv: &Move,
    config: &RulesConfig,
) -> LegalityResult<GameState> {
    check_move_legality_with_config(mv, game_state, config)?;
    apply_move_unchecked(game_state, mv)
}

pub fn apply_move_unchecked(game_state: &GameState, mv: &Move) -> LegalityResult<GameState> {
    let moved = game_state
        .piece_at(mv.from)
        .ok_or(MoveRejection::OutOfBounds(mv.from))?;
    let displaced = game_state
        .piece_at(mv.to)
        .ok_or(MoveRejection::OutOfBounds(mv.to))?;

    let Piece::Occupied(mover, kind) = moved else {
        return Err(InvariantViolation::EmptySource(mv.from).into());
    };

    let mut next = game_state.clone();

    // An enhanced knight landing on a friend trades places with it.
    let swaps = kind == PieceKind::Knight && displaced.color() == Some(mover);
    let vacated = if swaps { displaced } else { Piece::Empty };

    next.set_piece(mv.from, vacated)?;
    next.set_piece(mv.to, moved)?;

    if mv.is_enhanced() {
        next.spend_enhancement_charge(mover);
    }

    update_castling_rights(&mut next, mv, moved, displaced, swaps);

    next.pass_turn();
    next.push_history(*mv);

    emit(DiagnosticLevel::Trace, format!("applied {mv}"));

    Ok(next)
}

fn update_castling_rights(
    game_state: &mut GameState,
    mv: &Move,
    moved: Piece,
    displaced: Piece,
    swaps: bool,
) {
    if let Piece::Occupied(color, kind) = moved {
        match kind {
            PieceKind::King => game_state.clear_castling_rights(both_sides(color)),
            PieceKind::Rook => game_state.clear_castling_rights(home_corner_right(color, mv.from)),
            _ => {}
        }
    }

    // A rook captured on, or swapped off, its home corner loses its right.
    if let Piece::Occupied(color, kind) = displaced {
        match kind {
            PieceKind::Rook => game_state.clear_castling_rights(home_corner_right(color, mv.to)),
            PieceKind::King if swaps => game_state.clear_castling_rights(both_sides(color)),
            _ => {}
        }
    }
}

fn both_sides(color: Color) -> CastlingRights {
    match color {
        Color::White => CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
        Color::Black => CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
    }
}

fn home_row(color: Color) -> i8 {
    match color {
        Color::White => 0,
        Color::Black => 6,
    }
}

fn home_corner_right(color: Color, square: Square) -> CastlingRights {
    if square.row != home_row(color) {
        return 0;
    }
    match (color, square.col) {
        (Color::White, QUEEN_SIDE_ROOK_COL) => CASTLE_WHITE_QUEENSIDE,
        (Color::White, KING_SIDE_ROOK_COL) => CASTLE_WHITE_KINGSIDE,
        (Color::Black, QUEEN_SIDE_ROOK_COL) => CASTLE_BLACK_QUEENSIDE,
        (Color::Black, KING_SIDE_ROOK_COL) => CASTLE_BLACK_KINGSIDE,
        _ => 0,
    }
}
