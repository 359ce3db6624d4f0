//! Structured logging with tracing
//!
//! Centralized logging initialization using the tracing ecosystem.
//! The `ANNO_LOG` environment variable overrides the configured level
//! with a full EnvFilter directive string.

use crate::config::LoggingConfig;
use anno_domain::error::{Error, Result};
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging with the provided configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env("ANNO_LOG").unwrap_or_else(|_| EnvFilter::new(&config.level));

    // The builder types differ per format, so two branches
    let result = if config.json_format {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
    } else {
        fmt().with_env_filter(filter).with_target(true).try_init()
    };
    result.map_err(|e| Error::configuration(format!("Failed to initialize logging: {e}")))?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {}. Use trace, debug, info, warn, or error",
            level
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_log_level;
    use tracing::Level;

    #[test]
    fn parses_known_levels() {
        assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
        assert_eq!(parse_log_level("WARN").unwrap(), Level::WARN);
        assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    }

    #[test]
    fn rejects_unknown_level() {
        assert!(parse_log_level("loud").is_err());
    }
}
