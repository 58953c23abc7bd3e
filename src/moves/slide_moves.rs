//! Square-by-square slide walkers shared by rooks and bishops.
//!
//! Three flavours exist:
//! - `slide_reaches`: stops at the board edge and at the first occupied
//!   square, which is reachable only when it holds an enemy piece.
//! - `slide_reaches_unblocked`: stops only at the board edge.
//! - `wrapping_slide_reaches`: folds across both edges (toroidal) and keeps
//!   the occupancy rules of `slide_reaches`. The ray never hits an edge, so it
//!   ends when it returns to its origin or is blocked, and a step cap guards
//!   against a walker that fails to advance.

use crate::chess_errors::InvariantViolation;
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;

pub fn slide_reaches(
    game_state: &GameState,
    from: Square,
    to: Square,
    mover: Color,
    directions: &[(i8, i8)],
) -> bool {
    for &dir in directions {
        let mut next = from.offset(dir);
        while let Some(occupant) = game_state.piece_at(next) {
            if occupant.color() == Some(mover) {
                break;
            }
            if next == to {
                return true;
            }
            if !occupant.is_empty() {
                break;
            }
            next = next.offset(dir);
        }
    }
    false
}

pub fn slide_reaches_unblocked(from: Square, to: Square, directions: &[(i8, i8)]) -> bool {
    for &dir in directions {
        let mut next = from.offset(dir);
        while next.in_bounds() {
            if next == to {
                return true;
            }
            next = next.offset(dir);
        }
    }
    false
}

pub fn wrapping_slide_reaches(
    game_state: &GameState,
    from: Square,
    to: Square,
    mover: Color,
    directions: &[(i8, i8)],
    iteration_cap: usize,
) -> Result<bool, InvariantViolation> {
    for &dir in directions {
        let mut next = from.offset_wrapping(dir);
        let mut steps = 1usize;

        while next != from {
            if steps > iteration_cap {
                return Err(InvariantViolation::SlideIterationCapExceeded {
                    from,
                    to,
                    cap: iteration_cap,
                });
            }

            let occupant = game_state.piece_at(next).unwrap_or_default();
            if occupant.color() == Some(mover) {
                break;
            }
            if next == to {
                return Ok(true);
            }
            if !occupant.is_empty() {
                break;
            }

            next = next.offset_wrapping(dir);
            steps += 1;
        }
    }
    Ok(false)
}
