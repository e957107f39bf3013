//! Detector descriptors.

use super::{Context, WalkError};
use std::fmt;
use std::path::Path;

/// Callback invoked for a matched entry with the absolute path, the matched
/// key (extension, file name or directory name) and the walk context.
pub type ParseFn = fn(&Path, &str, &mut Context) -> Result<(), WalkError>;

/// A stateless technology detector.
///
/// Subscriptions and callbacks are independent: a detector fills in only the
/// ones it needs and leaves the rest as in [`Walker::EMPTY`].
#[derive(Clone, Copy)]
pub struct Walker {
    pub name: &'static str,
    /// Extensions including the leading dot, e.g. `.go`.
    pub exts: &'static [&'static str],
    pub files: &'static [&'static str],
    pub dirs: &'static [&'static str],
    pub parse_ext: Option<ParseFn>,
    pub parse_file: Option<ParseFn>,
    pub parse_dir: Option<ParseFn>,
}

impl Walker {
    pub const EMPTY: Self = Self {
        name: "",
        exts: &[],
        files: &[],
        dirs: &[],
        parse_ext: None,
        parse_file: None,
        parse_dir: None,
    };
}

impl fmt::Debug for Walker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Walker")
            .field("name", &self.name)
            .field("exts", &self.exts)
            .field("files", &self.files)
            .field("dirs", &self.dirs)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &Path, _: &str, _: &mut Context) -> Result<(), WalkError> {
        Ok(())
    }

    #[test]
    fn test_empty_walker() {
        let walker = Walker::EMPTY;
        assert!(walker.exts.is_empty() && walker.files.is_empty() && walker.dirs.is_empty());
        assert!(walker.parse_ext.is_none());
        assert!(walker.parse_file.is_none());
        assert!(walker.parse_dir.is_none());
    }

    #[test]
    fn test_debug_lists_subscriptions() {
        let walker = Walker {
            name: "go",
            exts: &[".go"],
            files: &["go.mod"],
            parse_ext: Some(noop),
            ..Walker::EMPTY
        };
        let debug = format!("{:?}", walker);
        assert!(debug.contains("\"go\""));
        assert!(debug.contains("go.mod"));
    }
}
