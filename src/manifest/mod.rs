//! Project manifest loaders.
//!
//! Every supported format parses into its own type implementing
//! [`Configure`], the read-only surface detectors consume. Loaders never
//! panic on absent or oddly-typed fields: missing values become empty
//! strings or empty lists, and only malformed syntax is an error.

pub mod cargo;
pub mod composer;
pub mod csproj;
pub mod go_mod;
pub mod package_json;
pub mod pom;
pub mod pubspec;
pub mod pyproject;
pub mod requirements;

pub use cargo::CargoToml;
pub use composer::Composer;
pub use csproj::CsProj;
pub use go_mod::GoMod;
pub use package_json::PackageJson;
pub use pom::Pom;
pub use pubspec::PubSpec;
pub use pyproject::PyProject;
pub use requirements::Requirements;

use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid {format}: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },
}

impl ManifestError {
    pub fn parse(format: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Parse {
            format,
            message: err.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// A declared dependency. The version is whatever the manifest wrote,
/// constraint operators included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    name: String,
    version: String,
}

impl Dependency {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn matches(&self, name: &str) -> bool {
        self.name == name
    }

    /// True when `prefix` is a prefix of this dependency's name.
    pub fn partial_match(&self, prefix: &str) -> bool {
        self.name.starts_with(prefix)
    }

    pub fn contains(&self, fragment: &str) -> bool {
        self.name.contains(fragment)
    }
}

/// A runtime or SDK constraint such as `go 1.21` or `node >=18`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    name: String,
    version: String,
}

impl Environment {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

/// Read-only view over one parsed manifest.
pub trait Configure {
    fn project_name(&self) -> &str;
    fn project_description(&self) -> &str;
    fn project_author(&self) -> &str;
    fn project_version(&self) -> &str;
    fn project_license(&self) -> &str;
    fn project_dependencies(&self) -> &[Dependency];
    fn project_dev_dependencies(&self) -> &[Dependency];
    fn environments(&self) -> &[Environment];

    fn environment(&self, name: &str) -> Option<&Environment> {
        self.environments().iter().find(|e| e.name() == name)
    }
}

/// A manifest value that is either given directly or inherited from an
/// enclosing workspace, e.g. `version.workspace = true` in Cargo.toml.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Inheritable<T> {
    Direct(T),
    Inherited {
        #[serde(default)]
        workspace: bool,
    },
}

impl<T> Default for Inheritable<T> {
    fn default() -> Self {
        Self::Inherited { workspace: false }
    }
}

impl<T: Clone> Inheritable<T> {
    /// The direct value, or `fallback` when the field defers to a workspace.
    pub fn resolve(&self, fallback: Option<&T>) -> Option<T> {
        match self {
            Self::Direct(value) => Some(value.clone()),
            Self::Inherited { .. } => fallback.cloned(),
        }
    }
}

/// Reads a manifest, mapping a missing file to [`ManifestError::NotFound`].
pub fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ManifestError::NotFound(path.to_path_buf())
        } else {
            ManifestError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
