//! Move legality checking.
//!
//! `check_move_legality` is a pure decision over a `Move` claim and a
//! `GameState` snapshot. Checks run in a fixed order and the first failure
//! wins:
//! 1. both squares on the board,
//! 2. claimed occupants match the grid (then: the source is not empty),
//! 3. the mover belongs to the side to move,
//! 4. an enhanced move has a charge available,
//! 5. the destination does not hold a friendly piece, unless an enhanced
//!    knight is moving,
//! 6. the piece's pattern reaches the destination under normal or enhanced
//!    rules.

use crate::chess_errors::{InvariantViolation, LegalityError, LegalityResult, MoveRejection};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::game_state::rules_config::RulesConfig;
use crate::moves::bishop_moves::{bishop_reaches, bishop_reaches_enhanced};
use crate::moves::king_moves::king_reaches;
use crate::moves::knight_moves::knight_reaches;
use crate::moves::move_descriptions::Move;
use crate::moves::pawn_moves::{pawn_reaches, pawn_reaches_enhanced};
use crate::moves::rook_moves::{rook_reaches, rook_reaches_enhanced};
use crate::utils::diagnostics::{emit, enabled, DiagnosticLevel};

/// Check `mv` against `game_state` with default rules.
#[inline]
pub fn check_move_legality(mv: &Move, game_state: &GameState) -> LegalityResult<()> {
    check_move_legality_with_config(mv, game_state, &RulesConfig::default())
}

pub fn check_move_legality_with_config(
    mv: &Move,
    game_state: &GameState,
    config: &RulesConfig,
) -> LegalityResult<()> {
    let outcome = evaluate(mv, game_state, config);
    let level = match &outcome {
        Ok(()) => DiagnosticLevel::Trace,
        Err(LegalityError::Rejected(_)) => DiagnosticLevel::Rejection,
        Err(LegalityError::Invariant(_)) => DiagnosticLevel::Invariant,
    };
    if enabled(level) {
        match &outcome {
            Ok(()) => emit(level, format!("accepted {mv}")),
            Err(err) => emit(level, format!("{err} ({mv})")),
        }
    }
    outcome
}

fn evaluate(mv: &Move, game_state: &GameState, config: &RulesConfig) -> LegalityResult<()> {
    let from_actual = game_state
        .piece_at(mv.from)
        .ok_or(MoveRejection::OutOfBounds(mv.from))?;
    let to_actual = game_state
        .piece_at(mv.to)
        .ok_or(MoveRejection::OutOfBounds(mv.to))?;

    if mv.from_piece != from_actual {
        return Err(MoveRejection::StateMismatch {
            square: mv.from,
            claimed: mv.from_piece,
            actual: from_actual,
        }
        .into());
    }
    if mv.to_piece != to_actual {
        return Err(MoveRejection::StateMismatch {
            square: mv.to,
            claimed: mv.to_piece,
            actual: to_actual,
        }
        .into());
    }

    let Piece::Occupied(mover, kind) = from_actual else {
        return Err(InvariantViolation::EmptySource(mv.from).into());
    };

    let side_to_move = game_state.turn();
    if mover != side_to_move {
        return Err(MoveRejection::WrongTurn {
            side_to_move,
            mover,
        }
        .into());
    }

    let enhanced = mv.is_enhanced();
    if enhanced && game_state.enhancement_charges_for(mover) == 0 {
        return Err(MoveRejection::InsufficientResource(mover).into());
    }

    let friendly_landing_allowed = enhanced && kind == PieceKind::Knight;
    if !friendly_landing_allowed && to_actual.color() == Some(mover) {
        return Err(MoveRejection::SameColorViolation(mv.to).into());
    }

    let reachable = if enhanced {
        reaches_enhanced(game_state, mv, mover, kind, config)?
    } else {
        reaches_normal(game_state, mv, mover, kind)
    };

    if !reachable {
        return Err(MoveRejection::UnreachableDestination {
            piece: from_actual,
            from: mv.from,
            to: mv.to,
        }
        .into());
    }

    Ok(())
}

fn reaches_normal(game_state: &GameState, mv: &Move, mover: Color, kind: PieceKind) -> bool {
    match kind {
        PieceKind::Knight => knight_reaches(mv.from, mv.to),
        PieceKind::King => king_reaches(mv.from, mv.to),
        PieceKind::Rook => rook_reaches(game_state, mv.from, mv.to, mover),
        PieceKind::Bishop => bishop_reaches(game_state, mv.from, mv.to, mover),
        PieceKind::Pawn => pawn_reaches(game_state, mv.from, mv.to, mover),
    }
}

fn reaches_enhanced(
    game_state: &GameState,
    mv: &Move,
    mover: Color,
    kind: PieceKind,
    config: &RulesConfig,
) -> Result<bool, InvariantViolation> {
    let reachable = match kind {
        PieceKind::Knight => knight_reaches(mv.from, mv.to),
        PieceKind::King => king_reaches(mv.from, mv.to),
        PieceKind::Rook => rook_reaches_enhanced(mv.from, mv.to),
        PieceKind::Bishop => bishop_reaches_enhanced(
            game_state,
            mv.from,
            mv.to,
            mover,
            config.wrap_slide_iteration_cap,
        )?,
        PieceKind::Pawn => pawn_reaches_enhanced(mv.from, mv.to, mover),
    };
    Ok(reachable)
}
