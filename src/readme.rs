//! README generation from a finished walk.

use crate::util::SafeFile;
use crate::walk::Context;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const DEFAULT_OUTPUT: &str = "README.md";

pub const COPYRIGHT: &str = "\n---\n\n_This Markdown was generated with ❤️ by [docwiz](https://github.com/ansurfen/docwiz)_";

#[derive(Debug, Error)]
pub enum ReadmeError {
    #[error("{} already exists, pass --force to overwrite it", .0.display())]
    Exists(PathBuf),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadmeOptions {
    pub force: bool,
    pub copyright: bool,
}

impl Default for ReadmeOptions {
    fn default() -> Self {
        Self {
            force: false,
            copyright: true,
        }
    }
}

fn title(ctx: &Context) -> Option<String> {
    match (ctx.project_owner.is_empty(), ctx.project_name.is_empty()) {
        (_, true) => None,
        (true, false) => Some(ctx.project_name.clone()),
        (false, false) => Some(format!("{}/{}", ctx.project_owner, ctx.project_name)),
    }
}

/// Renders the document for a generated context.
pub fn render(ctx: &Context, copyright: bool) -> String {
    let mut out = String::new();

    if let Some(title) = title(ctx) {
        let _ = writeln!(out, "# {title}\n");
    }
    if !ctx.project_stack.is_empty() {
        let _ = writeln!(out, "{}\n", ctx.project_stack);
    }
    if !ctx.project_description.is_empty() {
        let _ = writeln!(out, "{}\n", ctx.project_description);
    }
    for section in &ctx.sections {
        let _ = writeln!(out, "## {}\n\n{}\n", section.title, section.description);
    }

    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out.push('\n');

    if copyright {
        out.push_str(COPYRIGHT);
        out.push('\n');
    }
    out
}

/// Writes `content` to `path`. An existing file is only replaced with
/// `force`, and a failed write leaves whatever was there before.
pub fn write(path: &Path, content: &str, force: bool) -> Result<(), ReadmeError> {
    let io_err = |source: io::Error| ReadmeError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = if force {
        SafeFile::replace(path)
    } else {
        SafeFile::create(path)
    }
    .map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            ReadmeError::Exists(path.to_path_buf())
        } else {
            io_err(e)
        }
    })?;

    file.write_all(content.as_bytes()).map_err(io_err)?;
    file.commit().map_err(io_err)?;

    info!(path = %path.display(), bytes = content.len(), "wrote readme");
    Ok(())
}

/// Renders and writes in one step.
pub fn generate(ctx: &Context, path: &Path, options: ReadmeOptions) -> Result<(), ReadmeError> {
    write(path, &render(ctx, options.copyright), options.force)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badge::catalog;
    use tempfile::TempDir;

    fn context() -> Context {
        let mut ctx = Context::new(Vec::new());
        ctx.project_name = "docwiz".to_string();
        ctx.project_owner = "ansurfen".to_string();
        ctx.project_description = "Docs for everyone".to_string();
        ctx.mark("Go", &catalog::GO);
        ctx.generate();
        ctx
    }

    #[test]
    fn test_render_layout() {
        let text = render(&context(), false);

        assert!(text.starts_with("# ansurfen/docwiz\n\n[![Go]"));
        assert!(text.contains("\n\nDocs for everyone\n\n## 📦 Install\n\n<!-- description -->\n"));
        assert!(text.ends_with("## ✅ Test\n\n<!-- description -->\n"));
        assert!(!text.contains("docwiz](https://github.com/ansurfen/docwiz)"));
    }

    #[test]
    fn test_render_without_owner_or_name() {
        let mut ctx = context();
        ctx.project_owner.clear();
        assert!(render(&ctx, false).starts_with("# docwiz\n"));

        ctx.project_name.clear();
        assert!(render(&ctx, false).starts_with("[![Go]"));
    }

    #[test]
    fn test_copyright_footer() {
        let text = render(&context(), true);
        assert!(text.ends_with(&format!("{COPYRIGHT}\n")));
    }

    #[test]
    fn test_write_refuses_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT);
        std::fs::write(&path, "hand written").unwrap();

        let err = write(&path, "generated", false).unwrap_err();
        assert!(matches!(err, ReadmeError::Exists(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hand written");
    }

    #[test]
    fn test_force_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT);
        std::fs::write(&path, "hand written").unwrap();

        generate(
            &context(),
            &path,
            ReadmeOptions {
                force: true,
                copyright: false,
            },
        )
        .unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("# ansurfen/docwiz"));
    }
}
