//! Maps manifest dependency names to catalog badges.

use super::{Context, WalkError};
use crate::badge::{BadgeKind, BadgeUnion, SortableBadge};
use crate::manifest::{Configure, Dependency};
use tracing::trace;

/// Which version a resolved badge displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    /// The dependency's own declared version.
    Dependency,
    /// Leave the badge version alone; the library only proves a service or
    /// platform is in use.
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendedBadge {
    pub badge: BadgeUnion,
    pub version: VersionSource,
}

impl ExtendedBadge {
    pub const fn dependency(badge: BadgeUnion) -> Self {
        Self {
            badge,
            version: VersionSource::Dependency,
        }
    }

    pub const fn system(badge: BadgeUnion) -> Self {
        Self {
            badge,
            version: VersionSource::System,
        }
    }
}

/// Pattern table, checked in order.
pub type ResolverPattern = &'static [(&'static str, ExtendedBadge)];

/// Three-tier matcher: exact name, then prefix, then substring. The first
/// hit wins; within a tier, table order decides.
#[derive(Debug, Clone, Copy)]
pub struct DependencyResolver {
    pub full: ResolverPattern,
    pub partial: ResolverPattern,
    pub fuzzy: ResolverPattern,
}

impl DependencyResolver {
    pub const EMPTY: Self = Self {
        full: &[],
        partial: &[],
        fuzzy: &[],
    };

    pub fn match_dependency(&self, dep: &Dependency) -> Option<&ExtendedBadge> {
        self.full
            .iter()
            .find(|(name, _)| dep.matches(name))
            .or_else(|| self.partial.iter().find(|(prefix, _)| dep.partial_match(prefix)))
            .or_else(|| self.fuzzy.iter().find(|(fragment, _)| dep.contains(fragment)))
            .map(|(_, badge)| badge)
    }

    pub fn match_name(&self, name: &str) -> Option<&ExtendedBadge> {
        self.match_dependency(&Dependency::new(name, ""))
    }

    pub fn is_empty(&self) -> bool {
        self.full.is_empty() && self.partial.is_empty() && self.fuzzy.is_empty()
    }
}

/// Resolves every dependency and dev dependency of `manifest` with the
/// resolver registered for the context's badge kind and upserts the hits
/// under `tag`. Returns the number of badges set.
pub fn resolve_dependency(
    ctx: &mut Context,
    resolvers: &[(BadgeKind, &DependencyResolver)],
    manifest: &dyn Configure,
    tag: &str,
) -> Result<usize, WalkError> {
    let kind = ctx.badge_kind();
    let resolver = resolvers
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, r)| *r)
        .ok_or_else(|| WalkError::MissingResolver {
            kind,
            tag: tag.to_string(),
        })?;

    let mut resolved = 0;
    let deps = manifest
        .project_dependencies()
        .iter()
        .chain(manifest.project_dev_dependencies());

    for dep in deps {
        let Some(entry) = resolver.match_dependency(dep) else {
            continue;
        };
        let Some(mut badge) = entry.badge.select(kind) else {
            continue;
        };
        if entry.version == VersionSource::Dependency {
            badge.set_version(dep.version());
        }
        trace!(dependency = dep.name(), badge = badge.id(), tag, "resolved dependency");
        ctx.upsert(SortableBadge::new(tag, badge));
        resolved += 1;
    }

    Ok(resolved)
}
