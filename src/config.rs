//! Configuration management for docwiz
//!
//! Settings are read from environment variables and fall back to defaults.
//! Command-line flags override whatever the environment provides.
//!
//! # Environment Variables
//!
//! - `DOCWIZ_BADGE_KIND`: badge family (shield|badgen) - default: "shield"
//! - `DOCWIZ_MARKUP`: badge markup (markdown|rst|asciidoc|html) - default: "markdown"
//! - `DOCWIZ_IGNORE_FILE`: ignore file name relative to the project root - default: ".docwizignore"
//! - `DOCWIZ_LOG_LEVEL`: logging level - default: "info"
//!
//! # Example
//!
//! ```no_run
//! use docwiz::DocwizConfig;
//!
//! let config = DocwizConfig::from_env()?;
//! config.validate()?;
//! println!("{}", config);
//! # Ok::<(), docwiz::ConfigError>(())
//! ```

use crate::badge::{BadgeKind, Markup};
use crate::filter::DEFAULT_IGNORE_FILE;
use crate::util::logging::try_parse_level;
use std::env;
use std::fmt;
use thiserror::Error;

pub const BADGE_KIND_ENV: &str = "DOCWIZ_BADGE_KIND";
pub const MARKUP_ENV: &str = "DOCWIZ_MARKUP";
pub const IGNORE_FILE_ENV: &str = "DOCWIZ_IGNORE_FILE";
pub const LOG_LEVEL_ENV: &str = crate::util::logging::LOG_LEVEL_ENV;

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid badge kind: {0}. Valid options: shield, badgen")]
    InvalidBadgeKind(String),

    #[error("Invalid markup: {0}. Valid options: markdown, rst, asciidoc, html")]
    InvalidMarkup(String),

    #[error("Invalid log level: {0}. Valid options: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocwizConfig {
    pub badge_kind: BadgeKind,
    pub markup: Markup,

    /// Resolved against the walked root.
    pub ignore_file: String,

    /// trace, debug, info, warn or error
    pub log_level: String,
}

impl Default for DocwizConfig {
    fn default() -> Self {
        Self {
            badge_kind: BadgeKind::Shield,
            markup: Markup::Markdown,
            ignore_file: DEFAULT_IGNORE_FILE.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

fn env_value(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl DocwizConfig {
    /// Loads `DOCWIZ_*` variables. Unset or blank variables keep their
    /// defaults, unknown badge kinds and markups are rejected.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(kind) = env_value(BADGE_KIND_ENV) {
            config.badge_kind =
                BadgeKind::from_name(&kind).ok_or(ConfigError::InvalidBadgeKind(kind))?;
        }
        if let Some(markup) = env_value(MARKUP_ENV) {
            config.markup = Markup::from_name(&markup).ok_or(ConfigError::InvalidMarkup(markup))?;
        }
        if let Some(file) = env_value(IGNORE_FILE_ENV) {
            config.ignore_file = file;
        }
        if let Some(level) = env_value(LOG_LEVEL_ENV) {
            config.log_level = level.to_lowercase();
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if try_parse_level(&self.log_level).is_none() {
            return Err(ConfigError::InvalidLogLevel(self.log_level.clone()));
        }
        Ok(())
    }
}

impl fmt::Display for DocwizConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Docwiz Configuration:")?;
        writeln!(f, "  Badge Kind: {}", self.badge_kind)?;
        writeln!(f, "  Markup: {}", self.markup)?;
        writeln!(f, "  Ignore File: {}", self.ignore_file)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}
