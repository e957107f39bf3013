//! `.docwizignore`: path exclusion plus badge suppression.
//!
//! The file holds gitignore-syntax patterns. A line starting with
//! `# @docwiz-badge` switches to the suppression section, where every
//! following line is a badge id to leave out of the rendered stack:
//!
//! ```text
//! target/
//! node_modules/
//! !vendor/keep.js
//!
//! # @docwiz-badge
//! Markdown
//! YAML
//! ```

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_IGNORE_FILE: &str = ".docwizignore";
pub const BADGE_SECTION_MARKER: &str = "# @docwiz-badge";

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("failed to read ignore file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid ignore pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: ignore::Error,
    },
}

#[derive(Debug, Clone)]
pub struct IgnoreFilter {
    gitignore: Gitignore,
    suppressed: BTreeSet<String>,
}

impl Default for IgnoreFilter {
    fn default() -> Self {
        Self {
            gitignore: Gitignore::empty(),
            suppressed: BTreeSet::new(),
        }
    }
}

impl IgnoreFilter {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compiles ignore-file lines. Patterns are relative to `root`.
    pub fn from_lines<I, S>(root: impl AsRef<Path>, lines: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GitignoreBuilder::new(root.as_ref());
        let mut suppressed = BTreeSet::new();
        let mut in_badge_section = false;

        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with(BADGE_SECTION_MARKER) {
                in_badge_section = true;
                continue;
            }
            if in_badge_section {
                suppressed.insert(line.to_string());
            } else {
                builder
                    .add_line(None, line)
                    .map_err(|source| FilterError::Pattern {
                        pattern: line.to_string(),
                        source,
                    })?;
            }
        }

        let gitignore = builder.build().map_err(|source| FilterError::Pattern {
            pattern: String::new(),
            source,
        })?;

        Ok(Self {
            gitignore,
            suppressed,
        })
    }

    /// Loads `root/file_name`. A missing file yields an empty filter.
    pub fn load(root: impl AsRef<Path>, file_name: impl AsRef<Path>) -> Result<Self, FilterError> {
        let root = root.as_ref();
        let path = root.join(file_name);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let filter = Self::from_lines(root, content.lines())?;
                debug!(
                    path = %path.display(),
                    patterns = filter.gitignore.len(),
                    suppressed = filter.suppressed.len(),
                    "loaded ignore file"
                );
                Ok(filter)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no ignore file");
                Ok(Self::empty())
            }
            Err(source) => Err(FilterError::Io { path, source }),
        }
    }

    /// Gitignore-style match on a slash-separated path relative to the root.
    /// A leading `/` is ignored and a trailing `/` marks a directory.
    pub fn matches_path(&self, path: &str) -> bool {
        let path = path.trim_start_matches('/');
        let is_dir = path.ends_with('/');
        let path = path.trim_end_matches('/');
        if path.is_empty() {
            return false;
        }
        self.matches(Path::new(path), is_dir)
    }

    /// Whether `rel_path` or any of its parents is ignored.
    pub fn matches(&self, rel_path: &Path, is_dir: bool) -> bool {
        self.gitignore
            .matched_path_or_any_parents(rel_path, is_dir)
            .is_ignore()
    }

    pub fn has_negations(&self) -> bool {
        self.gitignore.num_whitelists() > 0
    }

    pub fn is_badge_suppressed(&self, id: &str) -> bool {
        self.suppressed.contains(id)
    }

    pub fn suppressed_badges(&self) -> impl Iterator<Item = &str> {
        self.suppressed.iter().map(String::as_str)
    }

    pub fn suppress_badge(&mut self, id: impl Into<String>) {
        self.suppressed.insert(id.into());
    }
}
