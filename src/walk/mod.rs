//! Stack detection: one traversal of the project tree dispatching entries
//! to the subscribed [`Walker`]s, which accumulate badges in a [`Context`].

pub mod context;
pub mod resolver;
pub mod walker;

pub use context::{Context, DetectorFailure, Section, SECTION_PLACEHOLDER};
pub use resolver::{
    resolve_dependency, DependencyResolver, ExtendedBadge, ResolverPattern, VersionSource,
};
pub use walker::{ParseFn, Walker};

use crate::badge::BadgeKind;
use crate::git::GitError;
use crate::manifest::ManifestError;
use ignore::WalkBuilder;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, trace, warn};

#[derive(Debug, Error)]
pub enum WalkError {
    #[error("cannot walk {}: {reason}", path.display())]
    Root { path: PathBuf, reason: String },

    #[error("traversal failed: {0}")]
    Traverse(#[from] ignore::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error("no {kind} resolver registered for {tag}")]
    MissingResolver { kind: BadgeKind, tag: String },
}

impl WalkError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

type Handlers = HashMap<&'static str, Vec<(&'static str, ParseFn)>>;

/// Subscription key to callbacks, in walker registration order.
#[derive(Default)]
struct Dispatch {
    exts: Handlers,
    files: Handlers,
    dirs: Handlers,
}

impl Dispatch {
    fn build(walkers: &[Walker]) -> Self {
        let mut dispatch = Self::default();
        for w in walkers {
            if let Some(f) = w.parse_ext {
                for ext in w.exts {
                    dispatch.exts.entry(*ext).or_default().push((w.name, f));
                }
            }
            if let Some(f) = w.parse_file {
                for file in w.files {
                    dispatch.files.entry(*file).or_default().push((w.name, f));
                }
            }
            if let Some(f) = w.parse_dir {
                for dir in w.dirs {
                    dispatch.dirs.entry(*dir).or_default().push((w.name, f));
                }
            }
        }
        dispatch
    }
}

fn invoke(handlers: Option<&Vec<(&'static str, ParseFn)>>, path: &Path, key: &str, ctx: &mut Context) {
    for (walker, parse) in handlers.into_iter().flatten() {
        trace!(walker, path = %path.display(), key, "dispatch");
        if let Err(err) = parse(path, key, ctx) {
            ctx.record_failure(walker, path, err);
        }
    }
}

/// Suffix from the last `.` of a file name, dot included.
pub fn extension(file_name: &str) -> Option<&str> {
    file_name.rfind('.').map(|i| &file_name[i..])
}

/// Walks `root` depth-first in file-name order and finalizes the context.
///
/// Only an unusable root is fatal. Detector and traversal errors are logged
/// and recorded in [`Context::failures`].
pub fn walk(root: &Path, ctx: &mut Context) -> Result<(), WalkError> {
    let start = Instant::now();
    let meta = std::fs::metadata(root).map_err(|e| WalkError::Root {
        path: root.to_path_buf(),
        reason: e.to_string(),
    })?;
    if !meta.is_dir() {
        return Err(WalkError::Root {
            path: root.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    let dispatch = Dispatch::build(ctx.walkers());
    let ignore = ctx.ignore().clone();

    info!(
        root = %root.display(),
        walkers = ctx.walkers().len(),
        badge_kind = %ctx.badge_kind(),
        "walking project"
    );

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    // With negations a child of an ignored directory may be re-included, so
    // the directory is still descended into.
    if !ignore.has_negations() {
        let prune = ignore.clone();
        let base = root.to_path_buf();
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            let rel = entry.path().strip_prefix(&base).unwrap_or(entry.path());
            let is_dir = entry.file_type().map_or(false, |t| t.is_dir());
            !prune.matches(rel, is_dir)
        });
    }

    let mut visited = 0usize;
    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "failed to read directory entry");
                ctx.record_failure("walk", root, WalkError::Traverse(err));
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }

        let path = entry.path();
        let rel = path.strip_prefix(root).unwrap_or(path);
        let is_dir = entry.file_type().map_or(false, |t| t.is_dir());
        if ignore.matches(rel, is_dir) {
            trace!(path = %rel.display(), "ignored");
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            debug!(path = %path.display(), "skipping non UTF-8 path");
            continue;
        };
        visited += 1;

        if is_dir {
            invoke(dispatch.dirs.get(name), path, name, ctx);
            continue;
        }

        invoke(dispatch.files.get(name), path, name, ctx);
        if let Some(ext) = extension(name) {
            invoke(dispatch.exts.get(ext), path, ext, ctx);
        }
    }

    ctx.generate();

    info!(
        entries = visited,
        badges = ctx.badges().len(),
        failures = ctx.failures().len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "walk completed"
    );
    Ok(())
}
