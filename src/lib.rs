//! docwiz - technology stack detection and README badge generation
//!
//! A single traversal of a project tree dispatches every entry to the
//! [`walk::Walker`]s subscribed to its extension, file name or directory
//! name. Walkers inspect source files and manifests and record badges in a
//! [`walk::Context`], which finally renders them into a stack line for a
//! README.
//!
//! # Example Usage
//!
//! ```no_run
//! use docwiz::detectors::all_walkers;
//! use docwiz::filter::IgnoreFilter;
//! use docwiz::walk::{walk, Context};
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! let ignore = IgnoreFilter::load(root, ".docwizignore")?;
//! let mut ctx = Context::new(all_walkers()).with_ignore(ignore);
//! walk(root, &mut ctx)?;
//!
//! println!("{}", ctx.project_stack);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Project Structure
//!
//! - [`badge`]: badge templates, the built-in catalog and markup rendering
//! - [`manifest`]: loaders for package manifests
//! - [`walk`]: traversal, the per-walk context and dependency resolution
//! - [`detectors`]: the built-in walkers
//! - [`filter`]: `.docwizignore` handling
//! - [`git`]: project identity from the origin remote
//! - [`readme`]: README rendering and writing

pub mod badge;
pub mod cli;
pub mod config;
pub mod detectors;
pub mod filter;
pub mod git;
pub mod manifest;
pub mod readme;
pub mod util;
pub mod walk;

pub use badge::{Badge, BadgeKind, BadgeUnion, Markup, SortableBadge};
pub use config::{ConfigError, DocwizConfig};
pub use filter::{FilterError, IgnoreFilter};
pub use manifest::{Configure, ManifestError};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};
pub use walk::{walk, Context, WalkError, Walker};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_docwiz() {
        assert_eq!(NAME, "docwiz");
    }
}
