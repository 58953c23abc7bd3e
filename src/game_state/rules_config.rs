//! Tunable rule parameters.
//!
//! Defaults reproduce the standard game. A host can override them from the
//! process environment before creating games.

use crate::game_state::chess_rules::WRAP_SLIDE_ITERATION_CAP;
use crate::utils::diagnostics::{set_diagnostic_level, DiagnosticLevel};

pub const ENV_STARTING_CHARGES: &str = "SAJCREDEZ_STARTING_CHARGES";
pub const ENV_WRAP_CAP: &str = "SAJCREDEZ_WRAP_CAP";
pub const ENV_DIAGNOSTICS: &str = "SAJCREDEZ_DIAGNOSTICS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesConfig {
    /// Enhancement charges each side holds when a game is created.
    pub starting_enhancement_charges: u32,
    /// Steps an enhanced bishop may take before the slide is declared runaway.
    pub wrap_slide_iteration_cap: usize,
    pub diagnostic_level: DiagnosticLevel,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_enhancement_charges: 0,
            wrap_slide_iteration_cap: WRAP_SLIDE_ITERATION_CAP,
            diagnostic_level: DiagnosticLevel::default(),
        }
    }
}

impl RulesConfig {
    /// Defaults overridden by any `SAJCREDEZ_*` variables that are set.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RulesConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_STARTING_CHARGES) {
            config.starting_enhancement_charges = value
                .trim()
                .parse::<u32>()
                .map_err(|_| format!("Invalid {ENV_STARTING_CHARGES}: {value}"))?;
        }

        if let Some(value) = lookup(ENV_WRAP_CAP) {
            let cap = value
                .trim()
                .parse::<usize>()
                .map_err(|_| format!("Invalid {ENV_WRAP_CAP}: {value}"))?;
            if cap == 0 {
                return Err(format!("{ENV_WRAP_CAP} must be at least 1"));
            }
            config.wrap_slide_iteration_cap = cap;
        }

        if let Some(value) = lookup(ENV_DIAGNOSTICS) {
            config.diagnostic_level = DiagnosticLevel::parse(&value)?;
        }

        Ok(config)
    }

    /// Make `diagnostic_level` the process-wide diagnostic threshold.
    pub fn install_diagnostics(&self) {
        set_diagnostic_level(self.diagnostic_level);
    }
}
