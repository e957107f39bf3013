//! Command handlers. Each returns the process exit code.

use super::commands::{ReadmeArgs, ScanArgs, WalkArgs};
use super::output::{OutputFormatter, ScanReport};
use crate::config::DocwizConfig;
use crate::detectors::{self, all_walkers};
use crate::filter::IgnoreFilter;
use crate::readme::{self, ReadmeOptions, DEFAULT_OUTPUT};
use crate::walk::{walk, Context, Walker};
use anyhow::{bail, Context as _, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

pub fn handle_scan(args: &ScanArgs) -> i32 {
    exit_code(run_scan(args))
}

pub fn handle_readme(args: &ReadmeArgs) -> i32 {
    exit_code(run_readme(args))
}

fn exit_code(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("error: {:#}", e);
            1
        }
    }
}

/// Environment configuration with command-line overrides applied.
pub fn resolve_config(args: &WalkArgs) -> Result<DocwizConfig> {
    let mut config = DocwizConfig::from_env().context("Invalid DOCWIZ_* environment")?;
    if let Some(kind) = args.badge_kind {
        debug!(%kind, "badge kind overridden");
        config.badge_kind = kind;
    }
    if let Some(markup) = args.markup {
        debug!(%markup, "markup overridden");
        config.markup = markup;
    }
    if let Some(ref file) = args.ignore_file {
        debug!(file = %file, "ignore file overridden");
        config.ignore_file = file.clone();
    }
    config.validate()?;
    Ok(config)
}

fn project_root(args: &WalkArgs) -> Result<PathBuf> {
    let root = match args.path {
        Some(ref path) => path.clone(),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    root.canonicalize()
        .with_context(|| format!("Project path does not exist: {}", root.display()))
}

/// The built-in walkers named by `--walker`, or all of them when none is
/// named.
pub fn select_walkers(names: &[String]) -> Result<Vec<Walker>> {
    if names.is_empty() {
        return Ok(all_walkers());
    }

    let mut selected = Vec::with_capacity(names.len());
    for name in names {
        match detectors::find(name) {
            Some(walker) => {
                if !selected.iter().any(|w: &Walker| w.name == walker.name) {
                    selected.push(walker);
                }
            }
            None => bail!("Unknown walker: {}", name),
        }
    }
    debug!(walkers = ?names, "walkers restricted");
    Ok(selected)
}

/// Walks `root` with `walkers` and returns the finished context.
pub fn scan_project(root: &Path, config: &DocwizConfig, walkers: Vec<Walker>) -> Result<Context> {
    let ignore = IgnoreFilter::load(root, &config.ignore_file)
        .with_context(|| format!("Failed to load {}", config.ignore_file))?;

    let mut ctx = Context::new(walkers)
        .with_ignore(ignore)
        .with_badge_kind(config.badge_kind)
        .with_markup(config.markup);
    walk(root, &mut ctx)?;

    if ctx.project_name.is_empty() {
        if let Some(dir) = root.file_name().and_then(|n| n.to_str()) {
            debug!(name = dir, "naming project after its directory");
            ctx.project_name = dir.to_string();
        }
    }
    Ok(ctx)
}

fn run_scan(args: &ScanArgs) -> Result<()> {
    let config = resolve_config(&args.walk)?;
    let walkers = select_walkers(&args.walk.walkers)?;
    let root = project_root(&args.walk)?;
    info!(root = %root.display(), "scanning project");

    let ctx = scan_project(&root, &config, walkers)?;
    let report = ScanReport::from_context(&root, &ctx);
    let output = OutputFormatter::new(args.format.into()).format(&report)?;
    println!("{}", output.trim_end());
    Ok(())
}

fn run_readme(args: &ReadmeArgs) -> Result<()> {
    let config = resolve_config(&args.walk)?;
    let walkers = select_walkers(&args.walk.walkers)?;
    let root = project_root(&args.walk)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| root.join(DEFAULT_OUTPUT));
    info!(root = %root.display(), output = %output.display(), "generating readme");

    let ctx = scan_project(&root, &config, walkers)?;
    readme::generate(
        &ctx,
        &output,
        ReadmeOptions {
            force: args.force,
            copyright: !args.no_copyright,
        },
    )?;

    info!("thanks for using docwiz!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badge::{BadgeKind, Markup};
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_flags_override_environment() {
        env::set_var(crate::config::BADGE_KIND_ENV, "badgen");
        let args = WalkArgs {
            badge_kind: Some(BadgeKind::Shield),
            markup: Some(Markup::Html),
            ..Default::default()
        };
        let config = resolve_config(&args);
        env::remove_var(crate::config::BADGE_KIND_ENV);

        let config = config.unwrap();
        assert_eq!(config.badge_kind, BadgeKind::Shield);
        assert_eq!(config.markup, Markup::Html);
    }

    #[test]
    #[serial]
    fn test_invalid_environment_fails() {
        env::set_var(crate::config::MARKUP_ENV, "wiki");
        let result = resolve_config(&WalkArgs::default());
        env::remove_var(crate::config::MARKUP_ENV);
        assert!(result.is_err());
    }

    #[test]
    fn test_scan_names_project_after_directory() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("toolbox");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("run.sh"), "#!/bin/sh\n").unwrap();

        let ctx = scan_project(&root, &DocwizConfig::default(), all_walkers()).unwrap();
        assert_eq!(ctx.project_name, "toolbox");
        assert!(ctx.contains("BashScript"));
    }

    #[test]
    fn test_scan_missing_root() {
        let dir = TempDir::new().unwrap();
        let result = scan_project(
            &dir.path().join("gone"),
            &DocwizConfig::default(),
            all_walkers(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_select_walkers() {
        assert_eq!(select_walkers(&[]).unwrap().len(), all_walkers().len());

        let names = vec!["go".to_string(), "docker".to_string(), "go".to_string()];
        let selected: Vec<&str> = select_walkers(&names)
            .unwrap()
            .iter()
            .map(|w| w.name)
            .collect();
        assert_eq!(selected, vec!["go", "docker"]);

        let err = select_walkers(&["cobol".to_string()]).unwrap_err();
        assert!(err.to_string().contains("cobol"));
    }

    #[test]
    fn test_scan_with_selected_walkers() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("main.go"), "package main\n").unwrap();
        fs::write(dir.path().join("Dockerfile"), "FROM scratch\n").unwrap();

        let walkers = select_walkers(&["docker".to_string()]).unwrap();
        let ctx = scan_project(dir.path(), &DocwizConfig::default(), walkers).unwrap();
        assert!(ctx.contains("Docker"));
        assert!(!ctx.contains("Go"));
    }
}
