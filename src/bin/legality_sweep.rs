//! Randomized legality sweep over the starting position.
//!
//! Usage:
//! `cargo run --release --bin legality_sweep`
//! `cargo run --release --bin legality_sweep -- --samples 200000 --seed 7`
//!
//! Rule overrides are read from `SAJCREDEZ_*` environment variables.

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::Utc;
use rand::{rngs::StdRng, Rng, SeedableRng};

use sajcredez::chess_errors::{InvariantViolation, LegalityError, MoveRejection};
use sajcredez::game_state::chess_types::{Color, Square};
use sajcredez::game_state::game_state::GameState;
use sajcredez::game_state::rules_config::RulesConfig;
use sajcredez::move_generation::legal_move_checks::check_move_legality_with_config;
use sajcredez::moves::move_descriptions::Move;

fn parse_arg_u64(flag: &str, default: u64) -> u64 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u64>() {
                return v;
            }
        }
    }
    default
}

fn outcome_label(outcome: &Result<(), LegalityError>) -> &'static str {
    match outcome {
        Ok(()) => "accepted",
        Err(LegalityError::Rejected(reason)) => match reason {
            MoveRejection::OutOfBounds(_) => "out_of_bounds",
            MoveRejection::StateMismatch { .. } => "state_mismatch",
            MoveRejection::WrongTurn { .. } => "wrong_turn",
            MoveRejection::InsufficientResource(_) => "insufficient_resource",
            MoveRejection::SameColorViolation(_) => "same_color_violation",
            MoveRejection::UnreachableDestination { .. } => "unreachable_destination",
        },
        Err(LegalityError::Invariant(violation)) => match violation {
            InvariantViolation::EmptySource(_) => "invariant_empty_source",
            InvariantViolation::SlideIterationCapExceeded { .. } => "invariant_slide_cap",
        },
    }
}

fn random_square(rng: &mut StdRng) -> Square {
    // one step past each edge so bounds checks get exercised
    Square::new(rng.random_range(-1..8), rng.random_range(-1..8))
}

fn main() -> Result<(), String> {
    let samples = parse_arg_u64("--samples", 50_000);
    let seed = parse_arg_u64("--seed", 0x5A1C_0DE5);
    let config = RulesConfig::from_env()?;
    config.install_diagnostics();

    let mut game = GameState::new_game_with_config(&config);
    game.grant_enhancement_charges(Color::White, 1);
    let mut rng = StdRng::seed_from_u64(seed);

    println!(
        "legality sweep: started={} samples={samples} seed={seed} wrap_cap={}",
        Utc::now().to_rfc3339(),
        config.wrap_slide_iteration_cap
    );

    let mut histogram = BTreeMap::<&'static str, u64>::new();
    let started = Instant::now();

    for _ in 0..samples {
        let from = random_square(&mut rng);
        let to = random_square(&mut rng);
        let mut mv = Move::claim(&game, from, to);
        if rng.random_bool(0.25) {
            mv = mv.enhanced();
        }

        let first = check_move_legality_with_config(&mv, &game, &config);
        let second = check_move_legality_with_config(&mv, &game, &config);
        if first != second {
            return Err(format!("non-repeatable verdict for {mv}: {first:?} vs {second:?}"));
        }

        *histogram.entry(outcome_label(&first)).or_insert(0) += 1;
    }

    let elapsed = started.elapsed();
    for (label, count) in &histogram {
        println!("{label:>26}: {count}");
    }
    println!(
        "elapsed_ms={} checks_per_sec={:.0}",
        elapsed.as_millis(),
        (samples * 2) as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
    );

    Ok(())
}
