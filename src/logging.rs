//! Log setup for the simulator binary.
//!
//! `LOG_LEVEL` names follow the usual severity ladder. `FATAL` and `CRITICAL`
//! collapse onto `error`, and `WARNING` is accepted for `warn`. Numeric
//! thresholds (10 debug, 20 info, 30 warning, 40 error, 50 critical) are
//! accepted too; anything below 10 enables everything.

use crate::core::error::{Result, SimError};
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Parse a level name (case-insensitive) or numeric threshold.
pub fn parse_level(name: &str) -> Result<Level> {
    let name = name.trim();
    if let Ok(threshold) = name.parse::<u32>() {
        return Ok(match threshold {
            40.. => Level::ERROR,
            30..=39 => Level::WARN,
            20..=29 => Level::INFO,
            10..=19 => Level::DEBUG,
            _ => Level::TRACE,
        });
    }

    match name.to_ascii_uppercase().as_str() {
        "FATAL" | "CRITICAL" | "ERROR" => Ok(Level::ERROR),
        "WARNING" | "WARN" => Ok(Level::WARN),
        "INFO" => Ok(Level::INFO),
        "DEBUG" => Ok(Level::DEBUG),
        "TRACE" => Ok(Level::TRACE),
        other => Err(SimError::InvalidConfig(format!(
            "unknown log level {:?}",
            other
        ))),
    }
}

/// Install the global subscriber. An already-installed subscriber is kept.
pub fn init(level: Level) {
    let filter = EnvFilter::new(level.as_str().to_ascii_lowercase());

    let installed = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
    if installed.is_err() {
        tracing::warn!(requested = %level, "Log subscriber already installed, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_aliases() {
        assert_eq!(parse_level("FATAL").unwrap(), Level::ERROR);
        assert_eq!(parse_level("critical").unwrap(), Level::ERROR);
        assert_eq!(parse_level("Error").unwrap(), Level::ERROR);
        assert_eq!(parse_level("WARNING").unwrap(), Level::WARN);
        assert_eq!(parse_level("warn").unwrap(), Level::WARN);
        assert_eq!(parse_level(" info ").unwrap(), Level::INFO);
        assert_eq!(parse_level("DEBUG").unwrap(), Level::DEBUG);
        assert_eq!(parse_level("trace").unwrap(), Level::TRACE);
    }

    #[test]
    fn test_parse_level_numeric_thresholds() {
        assert_eq!(parse_level("50").unwrap(), Level::ERROR);
        assert_eq!(parse_level("40").unwrap(), Level::ERROR);
        assert_eq!(parse_level("30").unwrap(), Level::WARN);
        assert_eq!(parse_level("20").unwrap(), Level::INFO);
        assert_eq!(parse_level("10").unwrap(), Level::DEBUG);
        assert_eq!(parse_level("0").unwrap(), Level::TRACE);
        assert_eq!(parse_level(" 25 ").unwrap(), Level::INFO);
    }

    #[test]
    fn test_parse_level_rejects_unknown() {
        assert!(matches!(
            parse_level("loud"),
            Err(SimError::InvalidConfig(_))
        ));
        assert!(parse_level("-10").is_err());
    }

    #[test]
    fn test_init_twice_keeps_first_subscriber() {
        init(Level::ERROR);
        init(Level::DEBUG);
        assert!(!tracing::enabled!(Level::DEBUG));
    }
}
