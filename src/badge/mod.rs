//! Badge model and markup rendering.
//!
//! Catalog entries are immutable `Copy` templates ([`ShieldBadge`],
//! [`BadgenBadge`]) grouped per technology in a [`BadgeUnion`]. A detected
//! technology becomes a [`Badge`]: a copy of the template for the active
//! [`BadgeKind`] plus an optional version. Versions therefore never leak back
//! into the catalog.

pub mod badgen;
pub mod catalog;
pub mod shield;

pub use badgen::BadgenBadge;
pub use shield::{ShieldBadge, ShieldStyle};

use crate::define_choice_enum;
use url::Url;

define_choice_enum! {
    /// Rendering family, chosen once per walk.
    #[derive(Default)]
    BadgeKind {
        #[default]
        Shield => "shield" | "shields" | "shields.io",
        Badgen => "badgen" | "badgen.net",
    }
}

define_choice_enum! {
    /// Text markup the stack line is rendered in.
    #[derive(Default)]
    Markup {
        #[default]
        Markdown => "markdown" | "md",
        Rst => "rst" | "restructuredtext",
        AsciiDoc => "asciidoc" | "adoc",
        Html => "html",
    }
}

/// URL construction shared by both rendering families.
pub trait Render {
    /// Display name; also the identity used for dedup and suppression.
    fn id(&self) -> &str;

    /// Link target wrapped around the image, empty when none.
    fn href(&self) -> &str;

    /// Image URL, with `version` shown as the badge message when present.
    fn url(&self, version: Option<&str>) -> String;
}

/// The template actually used by a [`Badge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTemplate {
    Shield(ShieldBadge),
    Badgen(BadgenBadge),
}

impl Render for BadgeTemplate {
    fn id(&self) -> &str {
        match self {
            Self::Shield(b) => b.id(),
            Self::Badgen(b) => b.id(),
        }
    }

    fn href(&self) -> &str {
        match self {
            Self::Shield(b) => b.href(),
            Self::Badgen(b) => b.href(),
        }
    }

    fn url(&self, version: Option<&str>) -> String {
        match self {
            Self::Shield(b) => b.url(version),
            Self::Badgen(b) => b.url(version),
        }
    }
}

impl From<ShieldBadge> for BadgeTemplate {
    fn from(b: ShieldBadge) -> Self {
        Self::Shield(b)
    }
}

impl From<BadgenBadge> for BadgeTemplate {
    fn from(b: BadgenBadge) -> Self {
        Self::Badgen(b)
    }
}

/// A catalog entry with one optional template per rendering family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeUnion {
    pub shield: Option<ShieldBadge>,
    pub badgen: Option<BadgenBadge>,
}

impl BadgeUnion {
    pub const fn shield(shield: ShieldBadge) -> Self {
        Self {
            shield: Some(shield),
            badgen: None,
        }
    }

    pub const fn with_badgen(self, badgen: BadgenBadge) -> Self {
        Self {
            shield: self.shield,
            badgen: Some(badgen),
        }
    }

    /// Fresh badge for `kind`, or `None` when the family has no template.
    pub fn select(&self, kind: BadgeKind) -> Option<Badge> {
        let template = match kind {
            BadgeKind::Shield => self.shield.map(BadgeTemplate::Shield),
            BadgeKind::Badgen => self.badgen.map(BadgeTemplate::Badgen),
        }?;
        Some(Badge::new(template))
    }
}

/// A detected technology ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    template: BadgeTemplate,
    version: Option<String>,
}

impl Badge {
    pub fn new(template: impl Into<BadgeTemplate>) -> Self {
        Self {
            template: template.into(),
            version: None,
        }
    }

    pub fn id(&self) -> &str {
        self.template.id()
    }

    pub fn href(&self) -> &str {
        self.template.href()
    }

    pub fn template(&self) -> &BadgeTemplate {
        &self.template
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// An empty version clears it, so `""` renders like no version at all.
    pub fn set_version(&mut self, version: impl Into<String>) {
        let version = version.into();
        let version = version.trim();
        self.version = (!version.is_empty()).then(|| version.to_string());
    }

    pub fn url(&self) -> String {
        self.template.url(self.version())
    }

    pub fn markdown(&self) -> String {
        let icon = format!("![{}]({})", self.id(), self.url());
        if self.href().is_empty() {
            icon
        } else {
            format!("[{}]({})", icon, self.href())
        }
    }

    pub fn rst(&self) -> String {
        let mut out = format!(".. image:: {}\n   :alt: {}\n", self.url(), self.id());
        if !self.href().is_empty() {
            out.push_str(&format!("   :target: {}\n", self.href()));
        }
        out
    }

    pub fn asciidoc(&self) -> String {
        if self.href().is_empty() {
            format!("image:{}[{}]", self.url(), self.id())
        } else {
            format!("image:{}[{},link={}]", self.url(), self.id(), self.href())
        }
    }

    pub fn html(&self) -> String {
        let icon = format!(
            "<img alt=\"{}\" src=\"{}\">",
            html_escape(self.id()),
            html_escape(&self.url())
        );
        if self.href().is_empty() {
            icon
        } else {
            format!("<a href=\"{}\">{}</a>", html_escape(self.href()), icon)
        }
    }

    pub fn render(&self, markup: Markup) -> String {
        match markup {
            Markup::Markdown => self.markdown(),
            Markup::Rst => self.rst(),
            Markup::AsciiDoc => self.asciidoc(),
            Markup::Html => self.html(),
        }
    }
}

/// A badge with the tag that orders it in the stack line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortableBadge {
    pub tag: String,
    pub badge: Badge,
}

impl SortableBadge {
    pub fn new(tag: impl Into<String>, badge: Badge) -> Self {
        Self {
            tag: tag.into(),
            badge,
        }
    }

    pub fn set_version(&mut self, version: impl Into<String>) -> &mut Self {
        self.badge.set_version(version);
        self
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Parses one of the fixed service base URLs.
pub(crate) fn service_url(base: &str) -> Url {
    Url::parse(base).expect("badge service base URL is a valid absolute URL")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badge::catalog;

    #[test]
    fn test_markdown_wraps_href() {
        let badge = catalog::GO.select(BadgeKind::Shield).unwrap();
        let md = badge.markdown();
        assert!(md.starts_with("[![Go](https://img.shields.io/badge/"));
        assert!(md.ends_with("](https://golang.org/)"));
    }

    #[test]
    fn test_empty_version_renders_like_none() {
        let plain = catalog::GO.select(BadgeKind::Shield).unwrap();
        let mut empty = plain.clone();
        empty.set_version("");
        assert_eq!(plain.markdown(), empty.markdown());
        assert_eq!(empty.version(), None);
    }

    #[test]
    fn test_rst_block() {
        let mut badge = catalog::RUST.select(BadgeKind::Shield).unwrap();
        badge.set_version("1.70");
        let rst = badge.rst();
        assert!(rst.starts_with(".. image:: https://img.shields.io/badge/Rust-1.70-"));
        assert!(rst.contains("\n   :alt: Rust\n"));
        assert!(rst.contains(":target: https://www.rust-lang.org/"));
    }

    #[test]
    fn test_asciidoc_and_html() {
        let badge = catalog::DOCKER.select(BadgeKind::Shield).unwrap();
        assert!(badge.asciidoc().starts_with("image:https://img.shields.io/badge/Docker"));
        assert!(badge.asciidoc().ends_with("[Docker,link=https://www.docker.com/]"));

        let html = badge.html();
        assert!(html.starts_with("<a href=\"https://www.docker.com/\"><img alt=\"Docker\""));
        assert!(html.contains("&amp;"));
        assert!(html.ends_with("</a>"));
    }

    #[test]
    fn test_select_missing_family() {
        assert!(catalog::GO.select(BadgeKind::Badgen).is_none());
        assert!(catalog::DOCKER.select(BadgeKind::Badgen).is_some());
    }

    #[test]
    fn test_select_returns_independent_copies() {
        let mut first = catalog::GO.select(BadgeKind::Shield).unwrap();
        first.set_version("1.21");
        let second = catalog::GO.select(BadgeKind::Shield).unwrap();
        assert_eq!(second.version(), None);
    }

    #[test]
    fn test_choice_names() {
        assert_eq!(BadgeKind::from_name("Shields.io"), Some(BadgeKind::Shield));
        assert_eq!(BadgeKind::from_name("badgen"), Some(BadgeKind::Badgen));
        assert_eq!(Markup::from_name("adoc"), Some(Markup::AsciiDoc));
        assert_eq!(Markup::from_name("pdf"), None);
        assert_eq!(Markup::default(), Markup::Markdown);
        assert_eq!(BadgeKind::Badgen.to_string(), "badgen");
    }
}
