//! Errors produced by the legality engine and the capability interfaces.
//!
//! Two failure classes are kept apart:
//! - `MoveRejection` is the ordinary answer "this move is not legal here".
//!   Every variant is expected, recoverable, and names the specific rule that
//!   failed so callers (tests, UIs) can tell failure classes apart.
//! - `InvariantViolation` marks a state that should be impossible: a claim to
//!   move an empty square, or a runaway wrapping slide. These point at a bug in
//!   the caller or in the engine and are logged at a separate diagnostic level.
//!
//! `LegalityError` wraps both so a single `Result` can carry either.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, Piece, Square};

pub type LegalityResult<T> = Result<T, LegalityError>;

/// Why a well-formed move claim was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// Source or destination lies outside the 7x7 grid.
    OutOfBounds(Square),
    /// The claimed occupant of `square` differs from the board.
    StateMismatch {
        square: Square,
        claimed: Piece,
        actual: Piece,
    },
    /// The moving piece does not belong to the side to move.
    WrongTurn { side_to_move: Color, mover: Color },
    /// An enhanced move was requested with no charges left.
    InsufficientResource(Color),
    /// The destination holds a piece of the mover's own color.
    SameColorViolation(Square),
    /// No movement pattern connects the squares under the applicable rules.
    UnreachableDestination { piece: Piece, from: Square, to: Square },
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::OutOfBounds(square) => write!(f, "square {square} is out of bounds"),
            MoveRejection::StateMismatch {
                square,
                claimed,
                actual,
            } => write!(f, "claimed {claimed} on {square}, board holds {actual}"),
            MoveRejection::WrongTurn {
                side_to_move,
                mover,
            } => write!(f, "{mover} piece moved while {side_to_move} is to move"),
            MoveRejection::InsufficientResource(color) => {
                write!(f, "{color} has no enhancement charges left")
            }
            MoveRejection::SameColorViolation(square) => {
                write!(f, "destination {square} holds a piece of the mover's color")
            }
            MoveRejection::UnreachableDestination { piece, from, to } => {
                write!(f, "{piece} cannot reach {to} from {from}")
            }
        }
    }
}

impl Error for MoveRejection {}

/// A state the engine should never observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The move claims to move the (empty) occupant of `square`.
    EmptySource(Square),
    /// A wrapping slide took more than `cap` steps without settling.
    SlideIterationCapExceeded { from: Square, to: Square, cap: usize },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::EmptySource(square) => {
                write!(f, "move source {square} is empty")
            }
            InvariantViolation::SlideIterationCapExceeded { from, to, cap } => write!(
                f,
                "wrapping slide from {from} towards {to} exceeded {cap} steps"
            ),
        }
    }
}

impl Error for InvariantViolation {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalityError {
    Rejected(MoveRejection),
    Invariant(InvariantViolation),
}

impl LegalityError {
    #[inline]
    pub fn is_rejection(&self) -> bool {
        matches!(self, LegalityError::Rejected(_))
    }

    #[inline]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, LegalityError::Invariant(_))
    }

    pub fn rejection(&self) -> Option<MoveRejection> {
        match self {
            LegalityError::Rejected(reason) => Some(*reason),
            LegalityError::Invariant(_) => None,
        }
    }
}

impl fmt::Display for LegalityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LegalityError::Rejected(reason) => write!(f, "move rejected: {reason}"),
            LegalityError::Invariant(violation) => write!(f, "invariant violation: {violation}"),
        }
    }
}

impl Error for LegalityError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LegalityError::Rejected(reason) => Some(reason),
            LegalityError::Invariant(violation) => Some(violation),
        }
    }
}

impl From<MoveRejection> for LegalityError {
    fn from(reason: MoveRejection) -> Self {
        LegalityError::Rejected(reason)
    }
}

impl From<InvariantViolation> for LegalityError {
    fn from(violation: InvariantViolation) -> Self {
        LegalityError::Invariant(violation)
    }
}

pub type CapabilityResult<T> = Result<T, CapabilityError>;

/// Failure of an optional capability that the core does not provide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    NotImplemented(&'static str),
}

impl fmt::Display for CapabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapabilityError::NotImplemented(what) => write!(f, "{what} is not implemented"),
        }
    }
}

impl Error for CapabilityError {}
