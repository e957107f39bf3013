//! shields.io static badges.

use super::{service_url, Render};
use crate::define_choice_enum;

pub const SHIELDS_BASE_URL: &str = "https://img.shields.io/badge/";

define_choice_enum! {
    #[derive(Default)]
    ShieldStyle {
        Flat => "flat",
        FlatSquare => "flat-square",
        Plastic => "plastic",
        #[default]
        ForTheBadge => "for-the-badge",
        Social => "social",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShieldBadge {
    pub id: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub style: ShieldStyle,
    pub logo: &'static str,
    pub logo_color: &'static str,
    pub href: &'static str,
}

impl ShieldBadge {
    pub const fn new(
        id: &'static str,
        label: &'static str,
        color: &'static str,
        logo: &'static str,
        logo_color: &'static str,
        href: &'static str,
    ) -> Self {
        Self {
            id,
            label,
            color,
            style: ShieldStyle::ForTheBadge,
            logo,
            logo_color,
            href,
        }
    }

    pub const fn style(self, style: ShieldStyle) -> Self {
        Self { style, ..self }
    }
}

/// shields.io splits the badge path on `-` and `_`; literal ones are doubled.
fn escape_part(part: &str) -> String {
    part.replace('-', "--").replace('_', "__")
}

impl Render for ShieldBadge {
    fn id(&self) -> &str {
        self.id
    }

    fn href(&self) -> &str {
        self.href
    }

    fn url(&self, version: Option<&str>) -> String {
        let mut parts = vec![escape_part(self.label)];
        if let Some(version) = version.filter(|v| !v.is_empty()) {
            parts.push(escape_part(version));
        }
        if !self.color.is_empty() {
            parts.push(self.color.to_string());
        }
        let segment = format!("{}.svg", parts.join("-"));

        let mut url = service_url(SHIELDS_BASE_URL);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&segment);
        }

        {
            let mut query = url.query_pairs_mut();
            if !self.logo.is_empty() {
                query.append_pair("logo", self.logo);
            }
            if !self.logo_color.is_empty() {
                query.append_pair("logoColor", self.logo_color);
            }
            query.append_pair("style", self.style.name());
        }

        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GO: ShieldBadge = ShieldBadge::new(
        "Go",
        "Go",
        "#00ADD8",
        "go",
        "white",
        "https://golang.org/",
    );

    #[test]
    fn test_url_without_version() {
        assert_eq!(
            GO.url(None),
            "https://img.shields.io/badge/Go-%2300ADD8.svg?logo=go&logoColor=white&style=for-the-badge"
        );
    }

    #[test]
    fn test_url_with_version() {
        assert_eq!(
            GO.url(Some("1.21")),
            "https://img.shields.io/badge/Go-1.21-%2300ADD8.svg?logo=go&logoColor=white&style=for-the-badge"
        );
    }

    #[test]
    fn test_no_dangling_separator() {
        let url = GO.url(Some(""));
        assert!(!url.contains("Go--"));
        assert_eq!(url, GO.url(None));

        let colorless = ShieldBadge { color: "", ..GO };
        assert!(colorless.url(None).starts_with("https://img.shields.io/badge/Go.svg?"));
    }

    #[test]
    fn test_label_is_escaped() {
        let badge = ShieldBadge {
            label: "Apache Spark",
            ..GO
        };
        let url = badge.url(Some("3.5.0-rc1"));
        assert!(url.contains("/Apache%20Spark-3.5.0--rc1-%2300ADD8.svg"));
    }

    #[test]
    fn test_style_override() {
        let badge = GO.style(ShieldStyle::FlatSquare);
        assert!(badge.url(None).ends_with("style=flat-square"));
    }

    #[test]
    fn test_empty_logo_is_omitted() {
        let badge = ShieldBadge {
            logo: "",
            logo_color: "",
            ..GO
        };
        assert!(badge.url(None).ends_with(".svg?style=for-the-badge"));
    }
}
