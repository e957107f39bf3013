//! Utility modules for docwiz
//!
//! - Structured logging setup and configuration
//! - Choice enums shared by the CLI, config and reports
//! - Output files staged beside their target and renamed into place

pub mod choice_enum;
pub mod logging;
pub mod safe_file;

pub use logging::{init_default, init_from_env, init_logging, parse_level, LoggingConfig};
pub use safe_file::SafeFile;
