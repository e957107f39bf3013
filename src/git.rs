//! Project identity from the `origin` remote of a git checkout.

use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no origin remote in {}", .0.display())]
    MissingRemote(PathBuf),

    #[error("unrecognized remote url '{url}': {reason}")]
    InvalidRemote { url: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HostKind {
    GitHub,
    GitLab,
    Svn,
    Other,
}

impl HostKind {
    fn classify(host: &str) -> Self {
        let host = host.to_ascii_lowercase();
        if host.contains("github") {
            Self::GitHub
        } else if host.contains("gitlab") {
            Self::GitLab
        } else if host.contains("svn") {
            Self::Svn
        } else {
            Self::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Remote {
    pub host: String,
    pub kind: HostKind,
    pub owner: String,
    pub name: String,
}

impl Remote {
    /// Parses `git@host:owner/repo.git`, `ssh://git@host/owner/repo.git` and
    /// `https://host/owner/repo` forms. Nested groups end up in the owner.
    pub fn parse(raw: &str) -> Result<Self, GitError> {
        let raw = raw.trim();
        let invalid = |reason: &str| GitError::InvalidRemote {
            url: raw.to_string(),
            reason: reason.to_string(),
        };

        let normalized = if raw.contains("://") {
            raw.to_string()
        } else {
            // scp-like syntax: [user@]host:path
            let (authority, path) = raw
                .split_once(':')
                .ok_or_else(|| invalid("missing scheme or host separator"))?;
            format!("ssh://{}/{}", authority, path.trim_start_matches('/'))
        };

        let url = Url::parse(&normalized).map_err(|e| invalid(&e.to_string()))?;
        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| invalid("missing host"))?
            .to_string();

        let path = url.path().trim_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path);
        let (owner, name) = path
            .rsplit_once('/')
            .filter(|(owner, name)| !owner.is_empty() && !name.is_empty())
            .ok_or_else(|| invalid("expected <owner>/<repository> path"))?;

        Ok(Self {
            kind: HostKind::classify(&host),
            host,
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    pub fn web_url(&self) -> String {
        format!("https://{}/{}/{}", self.host, self.owner, self.name)
    }
}

/// The `url` of `[remote "origin"]` in a git config file.
pub fn origin_url(config: &str) -> Option<String> {
    let mut in_origin = false;
    for line in config.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if line.starts_with('[') {
            let section: String = line.chars().filter(|c| !c.is_whitespace()).collect();
            in_origin = section == "[remote\"origin\"]";
            continue;
        }
        if !in_origin {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            if key.trim() == "url" {
                return Some(value.trim().trim_matches('"').to_string());
            }
        }
    }
    None
}

/// Reads the origin remote of the repository whose `.git` directory is
/// `git_dir`.
pub fn read_origin(git_dir: &Path) -> Result<Remote, GitError> {
    let config_path = git_dir.join("config");
    let config = std::fs::read_to_string(&config_path).map_err(|source| GitError::Io {
        path: config_path.clone(),
        source,
    })?;
    let url = origin_url(&config).ok_or(GitError::MissingRemote(config_path))?;
    Remote::parse(&url)
}
