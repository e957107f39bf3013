//! Per-walk accumulator.

use super::{WalkError, Walker};
use crate::badge::{BadgeKind, BadgeUnion, Markup, SortableBadge};
use crate::filter::IgnoreFilter;
use crate::manifest::Configure;
use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const SECTION_PLACEHOLDER: &str = "<!-- description -->";

const DEFAULT_SECTIONS: [&str; 3] = ["📦 Install", "🚀 Usage", "✅ Test"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub description: String,
}

impl Section {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A detector callback or traversal step that failed without stopping the walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectorFailure {
    pub walker: String,
    pub path: PathBuf,
    pub message: String,
}

/// Mutable state of one walk. Badges are keyed by badge id, so setting the
/// same technology twice keeps one entry.
#[derive(Debug)]
pub struct Context {
    ignore: IgnoreFilter,
    walkers: Vec<Walker>,
    badge_kind: BadgeKind,
    markup: Markup,

    pub project_name: String,
    pub project_owner: String,
    pub project_description: String,
    pub project_stack: String,
    pub sections: Vec<Section>,

    stack: HashMap<String, SortableBadge>,
    failures: Vec<DetectorFailure>,
    generated: bool,
}

impl Context {
    pub fn new(walkers: Vec<Walker>) -> Self {
        Self {
            ignore: IgnoreFilter::empty(),
            walkers,
            badge_kind: BadgeKind::default(),
            markup: Markup::default(),
            project_name: String::new(),
            project_owner: String::new(),
            project_description: String::new(),
            project_stack: String::new(),
            sections: Vec::new(),
            stack: HashMap::new(),
            failures: Vec::new(),
            generated: false,
        }
    }

    pub fn with_ignore(mut self, ignore: IgnoreFilter) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn with_badge_kind(mut self, kind: BadgeKind) -> Self {
        self.badge_kind = kind;
        self
    }

    pub fn with_markup(mut self, markup: Markup) -> Self {
        self.markup = markup;
        self
    }

    pub fn ignore(&self) -> &IgnoreFilter {
        &self.ignore
    }

    pub fn walkers(&self) -> &[Walker] {
        &self.walkers
    }

    pub fn badge_kind(&self) -> BadgeKind {
        self.badge_kind
    }

    pub fn markup(&self) -> Markup {
        self.markup
    }

    /// Inserts or replaces the badge with the same id.
    pub fn upsert(&mut self, badge: SortableBadge) -> &mut SortableBadge {
        match self.stack.entry(badge.badge.id().to_string()) {
            Entry::Occupied(mut slot) => {
                slot.insert(badge);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(badge),
        }
    }

    /// Upserts a fresh badge for `entry` under `tag`. `None` when the active
    /// family has no template for it.
    pub fn set(&mut self, tag: &str, entry: &BadgeUnion) -> Option<&mut SortableBadge> {
        let badge = entry.select(self.badge_kind)?;
        Some(self.upsert(SortableBadge::new(tag, badge)))
    }

    /// Like [`Context::set`] but keeps an existing badge, and its version,
    /// untouched.
    pub fn mark(&mut self, tag: &str, entry: &BadgeUnion) -> Option<&mut SortableBadge> {
        let badge = entry.select(self.badge_kind)?;
        Some(
            self.stack
                .entry(badge.id().to_string())
                .or_insert_with(|| SortableBadge::new(tag, badge)),
        )
    }

    /// Marks `entry` and applies `version` when it is non-empty. A manifest
    /// without the field keeps the version an earlier manifest supplied.
    pub fn mark_versioned(
        &mut self,
        tag: &str,
        entry: &BadgeUnion,
        version: Option<&str>,
    ) -> Option<&mut SortableBadge> {
        let badge = self.mark(tag, entry)?;
        if let Some(version) = version.filter(|v| !v.is_empty()) {
            badge.set_version(version);
        }
        Some(badge)
    }

    pub fn get(&self, id: &str) -> Option<&SortableBadge> {
        self.stack.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut SortableBadge> {
        self.stack.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.stack.contains_key(id)
    }

    /// Badges ordered by `(tag, id)`, suppressed ones included.
    pub fn badges(&self) -> Vec<&SortableBadge> {
        let mut badges: Vec<&SortableBadge> = self.stack.values().collect();
        badges.sort_by(|a, b| (&a.tag, a.badge.id()).cmp(&(&b.tag, b.badge.id())));
        badges
    }

    /// Badges that end up in the stack line.
    pub fn visible_badges(&self) -> Vec<&SortableBadge> {
        self.badges()
            .into_iter()
            .filter(|b| !self.ignore.is_badge_suppressed(b.badge.id()))
            .collect()
    }

    /// Takes the description, and the name while none is known, from a
    /// manifest.
    pub fn adopt_metadata(&mut self, manifest: &dyn Configure) {
        if self.project_description.is_empty() {
            self.project_description = manifest.project_description().trim().to_string();
        }
        if self.project_name.is_empty() {
            self.project_name = manifest.project_name().trim().to_string();
        }
    }

    pub fn failures(&self) -> &[DetectorFailure] {
        &self.failures
    }

    pub(crate) fn record_failure(&mut self, walker: &str, path: &Path, err: WalkError) {
        if matches!(&err, WalkError::Manifest(e) if e.is_not_found()) {
            debug!(walker, path = %path.display(), "manifest vanished during walk");
            return;
        }
        warn!(walker, path = %path.display(), error = %err, "detector failed");
        self.failures.push(DetectorFailure {
            walker: walker.to_string(),
            path: path.to_path_buf(),
            message: err.to_string(),
        });
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Appends the default sections and renders the stack line. Runs once;
    /// later calls do nothing.
    pub fn generate(&mut self) {
        if self.generated {
            return;
        }
        self.generated = true;

        self.sections.extend(
            DEFAULT_SECTIONS
                .iter()
                .map(|title| Section::new(*title, SECTION_PLACEHOLDER)),
        );

        let markup = self.markup;
        let rendered: Vec<String> = self
            .visible_badges()
            .into_iter()
            .map(|b| b.badge.render(markup))
            .collect();
        self.project_stack = rendered.join(" ");

        debug!(
            badges = self.stack.len(),
            rendered = rendered.len(),
            failures = self.failures.len(),
            "generated project stack"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badge::catalog;
    use crate::manifest::ManifestError;

    fn suppressing(ids: &[&str]) -> IgnoreFilter {
        let mut lines = vec!["# @docwiz-badge"];
        lines.extend_from_slice(ids);
        IgnoreFilter::from_lines("/repo", lines).unwrap()
    }

    #[test]
    fn test_set_twice_keeps_one_entry() {
        let mut ctx = Context::new(Vec::new());
        ctx.set("Go", &catalog::GO).unwrap().set_version("1.20");
        ctx.set("Go", &catalog::GO).unwrap().set_version("1.21");

        assert_eq!(ctx.badges().len(), 1);
        assert_eq!(ctx.get("Go").unwrap().badge.version(), Some("1.21"));
    }

    #[test]
    fn test_mark_keeps_existing_version() {
        let mut ctx = Context::new(Vec::new());
        ctx.set("Go", &catalog::GO).unwrap().set_version("1.21");
        ctx.mark("Go", &catalog::GO);

        assert_eq!(ctx.get("Go").unwrap().badge.version(), Some("1.21"));
    }

    #[test]
    fn test_set_without_template_for_family() {
        let mut ctx = Context::new(Vec::new()).with_badge_kind(BadgeKind::Badgen);
        assert!(ctx.set("Go", &catalog::GO).is_none());
        assert!(ctx.set("Docker", &catalog::DOCKER).is_some());
        assert_eq!(ctx.badges().len(), 1);
    }

    #[test]
    fn test_badges_sorted_by_tag_then_id() {
        let mut ctx = Context::new(Vec::new());
        ctx.set("Rust", &catalog::RUST);
        ctx.set("Go", &catalog::REDIS);
        ctx.set("Go", &catalog::GO);
        ctx.set("Docker", &catalog::DOCKER);

        let ids: Vec<&str> = ctx.badges().iter().map(|b| b.badge.id()).collect();
        assert_eq!(ids, vec!["Docker", "Go", "Redis", "Rust"]);
    }

    #[test]
    fn test_generate_suppresses_and_joins() {
        let mut ctx = Context::new(Vec::new()).with_ignore(suppressing(&["Docker"]));
        ctx.set("Docker", &catalog::DOCKER);
        ctx.set("Go", &catalog::GO);
        ctx.set("Rust", &catalog::RUST);
        ctx.generate();

        let parts: Vec<&str> = ctx.project_stack.split(' ').collect();
        assert_eq!(parts.len(), 2);
        assert!(parts[0].starts_with("[![Go]("));
        assert!(parts[1].starts_with("[![Rust]("));
        assert!(ctx.contains("Docker"));
    }

    #[test]
    fn test_generate_runs_once() {
        let mut ctx = Context::new(Vec::new());
        ctx.set("Go", &catalog::GO);
        ctx.generate();
        let stack = ctx.project_stack.clone();
        ctx.generate();

        assert!(ctx.is_generated());
        assert_eq!(ctx.project_stack, stack);
        let titles: Vec<&str> = ctx.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["📦 Install", "🚀 Usage", "✅ Test"]);
        assert!(ctx
            .sections
            .iter()
            .all(|s| s.description == SECTION_PLACEHOLDER));
    }

    #[test]
    fn test_generate_uses_markup() {
        let mut ctx = Context::new(Vec::new()).with_markup(Markup::Rst);
        ctx.set("Go", &catalog::GO);
        ctx.generate();
        assert!(ctx.project_stack.starts_with(".. image:: https://img.shields.io/"));
    }

    #[test]
    fn test_mark_versioned_keeps_known_version() {
        let mut ctx = Context::new(Vec::new());
        ctx.mark_versioned("Rust", &catalog::RUST, Some("1.75"));
        ctx.mark_versioned("Rust", &catalog::RUST, Some(""));
        ctx.mark_versioned("Rust", &catalog::RUST, None);
        assert_eq!(ctx.get("Rust").unwrap().badge.version(), Some("1.75"));

        ctx.mark_versioned("Rust", &catalog::RUST, Some("1.80"));
        assert_eq!(ctx.get("Rust").unwrap().badge.version(), Some("1.80"));
        assert_eq!(ctx.badges().len(), 1);
    }

    #[test]
    fn test_empty_generate() {
        let mut ctx = Context::new(Vec::new());
        ctx.generate();
        assert_eq!(ctx.project_stack, "");
    }

    #[test]
    fn test_adopt_metadata() {
        let manifest = crate::manifest::PackageJson::parse(
            r#"{"name": "web", "description": "Storefront"}"#,
        )
        .unwrap();

        let mut ctx = Context::new(Vec::new());
        ctx.project_name = "shop".to_string();
        ctx.adopt_metadata(&manifest);

        assert_eq!(ctx.project_name, "shop");
        assert_eq!(ctx.project_description, "Storefront");
    }

    #[test]
    fn test_not_found_is_not_recorded() {
        let mut ctx = Context::new(Vec::new());
        let path = Path::new("/repo/go.mod");
        ctx.record_failure(
            "go",
            path,
            ManifestError::NotFound(path.to_path_buf()).into(),
        );
        ctx.record_failure(
            "go",
            path,
            ManifestError::parse("go.mod", "unterminated block").into(),
        );

        assert_eq!(ctx.failures().len(), 1);
        assert_eq!(ctx.failures()[0].walker, "go");
        assert!(ctx.failures()[0].message.contains("unterminated block"));
    }
}
