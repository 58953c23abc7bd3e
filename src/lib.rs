//! Crate root module declarations for the Sajcredez rules core.
//!
//! Sajcredez is a 7x7 chess variant without queens in which each side holds a
//! pool of enhancement charges; spending one changes how the moving piece
//! travels for that move. This crate owns the board state and the move
//! legality engine. Rendering, notation, and game drivers live elsewhere.

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod rules_config;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod rook_moves;
    pub mod slide_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod move_generator;
}

pub mod chess_errors;

pub mod utils {
    pub mod diagnostics;
}
