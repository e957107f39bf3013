//! badgen.net icon badges.

use super::{service_url, Render};

pub const BADGEN_BASE_URL: &str = "https://badgen.net/badge/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgenBadge {
    pub id: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

impl BadgenBadge {
    pub const fn new(
        id: &'static str,
        label: &'static str,
        color: &'static str,
        icon: &'static str,
        href: &'static str,
    ) -> Self {
        Self {
            id,
            label,
            color,
            icon,
            href,
        }
    }
}

impl Render for BadgenBadge {
    fn id(&self) -> &str {
        self.id
    }

    fn href(&self) -> &str {
        self.href
    }

    /// With a version: `/badge/<label>/<version>/<color>?icon=<icon>`.
    /// Without one the label moves into the status slot and the subject is
    /// hidden: `/badge/icon/<label>/<color>?icon=<icon>&label=`.
    fn url(&self, version: Option<&str>) -> String {
        let color = self.color.trim_start_matches('#');
        let mut url = service_url(BADGEN_BASE_URL);

        let version = version.filter(|v| !v.is_empty());
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            match version {
                Some(version) => segments.push(self.label).push(version),
                None => segments.push("icon").push(self.label),
            };
            if !color.is_empty() {
                segments.push(color);
            }
        }

        {
            let mut query = url.query_pairs_mut();
            if !self.icon.is_empty() {
                query.append_pair("icon", self.icon);
            }
            if version.is_none() {
                query.append_pair("label", "");
            }
        }

        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCKER: BadgenBadge = BadgenBadge::new(
        "Docker",
        "docker",
        "blue",
        "docker",
        "https://www.docker.com/",
    );

    #[test]
    fn test_icon_form_without_version() {
        assert_eq!(
            DOCKER.url(None),
            "https://badgen.net/badge/icon/docker/blue?icon=docker&label="
        );
    }

    #[test]
    fn test_version_form() {
        assert_eq!(
            DOCKER.url(Some("24.0")),
            "https://badgen.net/badge/docker/24.0/blue?icon=docker"
        );
    }

    #[test]
    fn test_hex_color_loses_hash() {
        let badge = BadgenBadge {
            color: "#3178C6",
            ..DOCKER
        };
        assert!(badge.url(None).contains("/docker/3178C6?"));
    }
}
