//! Structured logging setup for docwiz
//!
//! Logs always go to stderr so that `docwiz scan` output on stdout stays
//! machine-readable. `RUST_LOG` takes precedence over everything configured
//! here.
//!
//! ```no_run
//! use docwiz::util::logging;
//! use tracing::{debug, info};
//!
//! logging::init_from_env();
//!
//! info!("scan started");
//! debug!(path = "go.mod", walker = "go", "dispatching");
//! ```

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

pub const LOG_LEVEL_ENV: &str = "DOCWIZ_LOG_LEVEL";
pub const LOG_JSON_ENV: &str = "DOCWIZ_LOG_JSON";

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level for the `docwiz` target
    pub level: Level,

    /// Emit one JSON object per event instead of human-readable lines
    pub use_json: bool,

    /// Include the module target (e.g., docwiz::walk) in logs
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Resolves the level from CLI flags.
    ///
    /// Precedence: explicit `--log-level`, then `-v` (debug), then `-q`
    /// (error), then `DOCWIZ_LOG_LEVEL`, then info.
    pub fn from_cli(log_level: Option<&str>, verbose: bool, quiet: bool) -> Self {
        let level = if let Some(level_str) = log_level {
            parse_level(level_str)
        } else if verbose {
            Level::DEBUG
        } else if quiet {
            Level::ERROR
        } else {
            let level_str = env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| "info".to_string());
            parse_level(&level_str)
        };

        Self {
            level,
            use_json: json_from_env(),
            ..Default::default()
        }
    }
}

/// Parses a log level from a string, defaulting to `INFO` when invalid.
///
/// ```
/// use docwiz::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("WARN"), Level::WARN);
/// assert_eq!(parse_level("loud"), Level::INFO);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match try_parse_level(level_str) {
        Some(level) => level,
        None => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

/// Strict variant of [`parse_level`] used by configuration validation.
pub fn try_parse_level(level_str: &str) -> Option<Level> {
    match level_str.trim().to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

fn json_from_env() -> bool {
    env::var(LOG_JSON_ENV)
        .ok()
        .and_then(|v| v.parse::<bool>().ok())
        .unwrap_or(false)
}

/// Installs the global subscriber. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();

        if env::var("RUST_LOG").is_err() {
            if let Ok(directive) = format!("docwiz={}", config.level).parse() {
                filter = filter.add_directive(directive);
            }
            if let Ok(directive) = "ignore=warn".parse() {
                filter = filter.add_directive(directive);
            }
        }

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}

pub fn init_default() {
    init_logging(LoggingConfig::default());
}

/// Initializes logging from `DOCWIZ_LOG_LEVEL` and `DOCWIZ_LOG_JSON`.
pub fn init_from_env() {
    init_logging(LoggingConfig::from_cli(None, false, false));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("trace"), Level::TRACE);
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("info"), Level::INFO);
        assert_eq!(parse_level("warn"), Level::WARN);
        assert_eq!(parse_level("error"), Level::ERROR);
    }

    #[test]
    fn test_parse_level_case_insensitive() {
        assert_eq!(parse_level("TRACE"), Level::TRACE);
        assert_eq!(parse_level("Debug"), Level::DEBUG);
        assert_eq!(parse_level(" info "), Level::INFO);
    }

    #[test]
    fn test_parse_level_invalid() {
        assert_eq!(parse_level("invalid"), Level::INFO);
        assert_eq!(parse_level(""), Level::INFO);
        assert_eq!(try_parse_level("verbose"), None);
    }

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(!config.use_json);
        assert!(config.include_target);
        assert!(!config.include_location);
    }

    #[test]
    #[serial]
    fn test_cli_precedence() {
        env::set_var(LOG_LEVEL_ENV, "trace");

        assert_eq!(
            LoggingConfig::from_cli(Some("warn"), true, false).level,
            Level::WARN
        );
        assert_eq!(LoggingConfig::from_cli(None, true, false).level, Level::DEBUG);
        assert_eq!(LoggingConfig::from_cli(None, false, true).level, Level::ERROR);
        assert_eq!(LoggingConfig::from_cli(None, false, false).level, Level::TRACE);

        env::remove_var(LOG_LEVEL_ENV);
        assert_eq!(LoggingConfig::from_cli(None, false, false).level, Level::INFO);
    }
}
