use crate::badge::{BadgeKind, Markup};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Technology stack detection and README badge generation
#[derive(Parser, Debug)]
#[command(
    name = "docwiz",
    about = "Technology stack detection and README badge generation",
    version,
    author,
    long_about = "docwiz walks a project tree, detects languages, frameworks and services \
                  from source files and manifests, and renders them as badges for a README."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Detect the technology stack of a project",
        long_about = "Walks the project and prints the detected badges.\n\n\
                      Examples:\n  \
                      docwiz scan\n  \
                      docwiz scan /path/to/project\n  \
                      docwiz scan --format json --badge-kind badgen"
    )]
    Scan(ScanArgs),

    #[command(
        about = "Generate a README for a project",
        long_about = "Walks the project and writes a README with title, stack badges, \
                      description and section stubs.\n\n\
                      Examples:\n  \
                      docwiz readme\n  \
                      docwiz readme -o docs/README.md --force\n  \
                      docwiz readme --markup html --no-copyright"
    )]
    Readme(ReadmeArgs),
}

/// Options shared by every command that walks a project.
#[derive(Args, Debug, Clone, Default)]
pub struct WalkArgs {
    #[arg(value_name = "PATH", help = "Project root (defaults to current directory)")]
    pub path: Option<PathBuf>,

    #[arg(
        long,
        value_name = "KIND",
        value_parser = parse_badge_kind,
        help = "Badge family: shield or badgen [env: DOCWIZ_BADGE_KIND]"
    )]
    pub badge_kind: Option<BadgeKind>,

    #[arg(
        long,
        value_name = "MARKUP",
        value_parser = parse_markup,
        help = "Badge markup: markdown, rst, asciidoc or html [env: DOCWIZ_MARKUP]"
    )]
    pub markup: Option<Markup>,

    #[arg(
        long,
        value_name = "FILE",
        help = "Ignore file relative to the project root [env: DOCWIZ_IGNORE_FILE]"
    )]
    pub ignore_file: Option<String>,

    #[arg(
        short = 'w',
        long = "walker",
        value_name = "NAME",
        help = "Only run the named walker; repeat for several (e.g. -w go -w docker)"
    )]
    pub walkers: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ScanArgs {
    #[command(flatten)]
    pub walk: WalkArgs,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct ReadmeArgs {
    #[command(flatten)]
    pub walk: WalkArgs,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Output file (defaults to README.md in the project root)"
    )]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Overwrite an existing output file")]
    pub force: bool,

    #[arg(long, help = "Omit the generated-by footer")]
    pub no_copyright: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

fn parse_badge_kind(s: &str) -> Result<BadgeKind, String> {
    BadgeKind::from_name(s)
        .ok_or_else(|| format!("Invalid badge kind: {}. Valid options: shield, badgen", s))
}

fn parse_markup(s: &str) -> Result<Markup, String> {
    Markup::from_name(s).ok_or_else(|| {
        format!(
            "Invalid markup: {}. Valid options: markdown, rst, asciidoc, html",
            s
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_default_scan_args() {
        let args = CliArgs::parse_from(["docwiz", "scan"]);
        match args.command {
            Commands::Scan(scan) => {
                assert_eq!(scan.format, OutputFormatArg::Human);
                assert!(scan.walk.path.is_none());
                assert!(scan.walk.badge_kind.is_none());
                assert!(scan.walk.markup.is_none());
                assert!(scan.walk.ignore_file.is_none());
                assert!(scan.walk.walkers.is_empty());
            }
            _ => panic!("Expected Scan command"),
        }
    }

    #[test]
    fn test_scan_with_options() {
        let args = CliArgs::parse_from([
            "docwiz",
            "scan",
            "/tmp/project",
            "--format",
            "json",
            "--badge-kind",
            "badgen",
            "--markup",
            "adoc",
            "--ignore-file",
            ".stackignore",
            "-w",
            "go",
            "--walker",
            "docker",
        ]);
        match args.command {
            Commands::Scan(scan) => {
                assert_eq!(scan.walk.path, Some(PathBuf::from("/tmp/project")));
                assert_eq!(scan.format, OutputFormatArg::Json);
                assert_eq!(scan.walk.badge_kind, Some(BadgeKind::Badgen));
                assert_eq!(scan.walk.markup, Some(Markup::AsciiDoc));
                assert_eq!(scan.walk.ignore_file.as_deref(), Some(".stackignore"));
                assert_eq!(scan.walk.walkers, vec!["go", "docker"]);
            }
            _ => panic!("Expected Scan command"),
        }
    }

    #[test]
    fn test_readme_args() {
        let args = CliArgs::parse_from([
            "docwiz",
            "readme",
            "-o",
            "docs/README.md",
            "--force",
            "--no-copyright",
        ]);
        match args.command {
            Commands::Readme(readme) => {
                assert_eq!(readme.output, Some(PathBuf::from("docs/README.md")));
                assert!(readme.force);
                assert!(readme.no_copyright);
            }
            _ => panic!("Expected Readme command"),
        }
    }

    #[test]
    fn test_invalid_badge_kind_rejected() {
        let result = CliArgs::try_parse_from(["docwiz", "scan", "--badge-kind", "flat"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let args = CliArgs::parse_from(["docwiz", "-v", "scan"]);
        assert!(args.verbose);
        assert!(!args.quiet);

        let args = CliArgs::parse_from(["docwiz", "scan", "-q"]);
        assert!(args.quiet);

        let args = CliArgs::parse_from(["docwiz", "--log-level", "debug", "readme"]);
        assert_eq!(args.log_level, Some("debug".to_string()));
        assert!(CliArgs::try_parse_from(["docwiz", "-v", "-q", "scan"]).is_err());
    }
}
