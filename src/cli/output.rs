//! Output formatting for `docwiz scan`
//!
//! A finished walk is captured as a [`ScanReport`] and rendered as JSON, YAML
//! or human-readable text.
//!
//! # Example
//!
//! ```no_run
//! use docwiz::cli::output::{OutputFormat, OutputFormatter, ScanReport};
//! use docwiz::detectors::all_walkers;
//! use docwiz::walk::{walk, Context};
//! use std::path::Path;
//!
//! let mut ctx = Context::new(all_walkers());
//! walk(Path::new("."), &mut ctx)?;
//! let report = ScanReport::from_context(Path::new("."), &ctx);
//! println!("{}", OutputFormatter::new(OutputFormat::Json).format(&report)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use anyhow::{Context as _, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::badge::{BadgeKind, Markup};
use crate::walk::{Context, DetectorFailure, Section};

const RULE: &str = "\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}";

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format (human-friendly, version-control friendly)
    Yaml,
    /// Human-readable formatted text
    Human,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeEntry {
    pub tag: String,
    pub id: String,
    pub version: Option<String>,
    pub url: String,
    pub suppressed: bool,
}

/// Everything a walk produced.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub root: PathBuf,
    pub project_name: String,
    pub project_owner: String,
    pub project_description: String,
    pub badge_kind: BadgeKind,
    pub markup: Markup,
    pub stack: String,
    pub badges: Vec<BadgeEntry>,
    pub sections: Vec<Section>,
    pub failures: Vec<DetectorFailure>,
}

impl ScanReport {
    pub fn from_context(root: &Path, ctx: &Context) -> Self {
        let badges = ctx
            .badges()
            .into_iter()
            .map(|b| BadgeEntry {
                tag: b.tag.clone(),
                id: b.badge.id().to_string(),
                version: b.badge.version().map(String::from),
                url: b.badge.url(),
                suppressed: ctx.ignore().is_badge_suppressed(b.badge.id()),
            })
            .collect();

        Self {
            root: root.to_path_buf(),
            project_name: ctx.project_name.clone(),
            project_owner: ctx.project_owner.clone(),
            project_description: ctx.project_description.clone(),
            badge_kind: ctx.badge_kind(),
            markup: ctx.markup(),
            stack: ctx.project_stack.clone(),
            badges,
            sections: ctx.sections.clone(),
            failures: ctx.failures().to_vec(),
        }
    }
}

/// Output formatter for scan reports
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, report: &ScanReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_json(report),
            OutputFormat::Yaml => self.format_yaml(report),
            OutputFormat::Human => Ok(self.format_human(report)),
        }
    }

    fn format_json(&self, report: &ScanReport) -> Result<String> {
        serde_json::to_string_pretty(report).context("Failed to serialize scan report to JSON")
    }

    fn format_yaml(&self, report: &ScanReport) -> Result<String> {
        serde_yaml::to_string(report).context("Failed to serialize scan report to YAML")
    }

    fn format_human(&self, report: &ScanReport) -> String {
        let mut output = String::new();

        output.push_str("\u{2713} Stack Detection Result\n");
        output.push_str(RULE);
        output.push_str("\n\n");

        let project = match (report.project_owner.is_empty(), report.project_name.is_empty()) {
            (_, true) => "(unknown)".to_string(),
            (true, false) => report.project_name.clone(),
            (false, false) => format!("{}/{}", report.project_owner, report.project_name),
        };
        output.push_str(&format!("Project:     {}\n", project));
        output.push_str(&format!("Root:        {}\n", report.root.display()));
        if !report.project_description.is_empty() {
            output.push_str(&format!("Description: {}\n", report.project_description));
        }
        output.push_str(&format!(
            "Badges:      {} ({})\n\n",
            report.badge_kind, report.markup
        ));

        if report.badges.is_empty() {
            output.push_str("Stack: (nothing detected)\n");
        } else {
            output.push_str("Stack:\n");
            let last = report.badges.len() - 1;
            for (i, badge) in report.badges.iter().enumerate() {
                let connector = if i == last { "\u{2514}" } else { "\u{251C}" };
                let version = badge.version.as_deref().unwrap_or("-");
                let hidden = if badge.suppressed { " (suppressed)" } else { "" };
                output.push_str(&format!(
                    "{}\u{2500} {:<12} {:<24} {}{}\n",
                    connector, badge.tag, badge.id, version, hidden
                ));
            }
        }

        if !report.failures.is_empty() {
            output.push_str("\n\u{26A0} Detector failures:\n");
            for failure in &report.failures {
                output.push_str(&format!(
                    "  - [{}] {}: {}\n",
                    failure.walker,
                    failure.path.display(),
                    failure.message
                ));
            }
        }

        if !report.stack.is_empty() {
            output.push_str("\nRendered:\n");
            output.push_str(&report.stack);
            output.push('\n');
        }

        output
    }
}
