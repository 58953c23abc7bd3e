//! Diagnostic line output for the legality engine.
//!
//! Lines follow the `info string ...` convention so they can sit next to
//! protocol traffic without confusing a front-end. Invariant violations and
//! ordinary rejections are emitted at different levels so a host can keep the
//! former on while silencing the latter.

use std::sync::atomic::{AtomicU8, Ordering};

use chrono::{DateTime, SecondsFormat, Utc};

/// Verbosity threshold, ordered from quietest to noisiest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum DiagnosticLevel {
    Off,
    #[default]
    Invariant,
    Rejection,
    Trace,
}

impl DiagnosticLevel {
    const fn as_u8(self) -> u8 {
        match self {
            DiagnosticLevel::Off => 0,
            DiagnosticLevel::Invariant => 1,
            DiagnosticLevel::Rejection => 2,
            DiagnosticLevel::Trace => 3,
        }
    }

    const fn from_u8(value: u8) -> Self {
        match value {
            0 => DiagnosticLevel::Off,
            1 => DiagnosticLevel::Invariant,
            2 => DiagnosticLevel::Rejection,
            _ => DiagnosticLevel::Trace,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            DiagnosticLevel::Off => "off",
            DiagnosticLevel::Invariant => "invariant",
            DiagnosticLevel::Rejection => "rejection",
            DiagnosticLevel::Trace => "trace",
        }
    }

    pub fn parse(text: &str) -> Result<Self, String> {
        match text.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(DiagnosticLevel::Off),
            "invariant" => Ok(DiagnosticLevel::Invariant),
            "rejection" => Ok(DiagnosticLevel::Rejection),
            "trace" => Ok(DiagnosticLevel::Trace),
            other => Err(format!("Invalid diagnostic level: {other}")),
        }
    }
}

static THRESHOLD: AtomicU8 = AtomicU8::new(DiagnosticLevel::Invariant.as_u8());

pub fn set_diagnostic_level(level: DiagnosticLevel) {
    THRESHOLD.store(level.as_u8(), Ordering::Relaxed);
}

pub fn diagnostic_level() -> DiagnosticLevel {
    DiagnosticLevel::from_u8(THRESHOLD.load(Ordering::Relaxed))
}

#[inline]
pub fn enabled(level: DiagnosticLevel) -> bool {
    level != DiagnosticLevel::Off && level <= diagnostic_level()
}

/// Render one diagnostic line without emitting it.
pub fn format_diagnostic(level: DiagnosticLevel, at: DateTime<Utc>, message: &str) -> String {
    format!(
        "info string sajcredez {} {} {}",
        level.label(),
        at.to_rfc3339_opts(SecondsFormat::Millis, true),
        message
    )
}

/// Write a line to stderr when `level` passes the process-wide threshold.
pub fn emit(level: DiagnosticLevel, message: impl AsRef<str>) {
    if !enabled(level) {
        return;
    }
    eprintln!("{}", format_diagnostic(level, Utc::now(), message.as_ref()));
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn formatted_line_carries_level_and_timestamp() {
        let at = Utc
            .with_ymd_and_hms(2024, 3, 9, 12, 30, 0)
            .single()
            .expect("valid timestamp");
        let line = format_diagnostic(DiagnosticLevel::Invariant, at, "empty source at (3, 3)");
        assert_eq!(
            line,
            "info string sajcredez invariant 2024-03-09T12:30:00.000Z empty source at (3, 3)"
        );
    }

    #[test]
    fn levels_parse_case_insensitively() {
        assert_eq!(DiagnosticLevel::parse("Trace"), Ok(DiagnosticLevel::Trace));
        assert_eq!(DiagnosticLevel::parse(" off "), Ok(DiagnosticLevel::Off));
        assert!(DiagnosticLevel::parse("loud").is_err());
    }

    #[test]
    fn threshold_orders_invariant_before_rejection() {
        assert!(DiagnosticLevel::Invariant < DiagnosticLevel::Rejection);
        assert!(DiagnosticLevel::Rejection < DiagnosticLevel::Trace);
        assert!(DiagnosticLevel::Off < DiagnosticLevel::Invariant);
    }
}
