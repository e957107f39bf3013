use docwiz::cli::commands::{CliArgs, Commands};
use docwiz::cli::handlers::{handle_readme, handle_scan};
use docwiz::util::logging::{init_logging, LoggingConfig};
use docwiz::VERSION;

use clap::Parser;
use tracing::debug;

fn main() {
    let args = CliArgs::parse();
    init_logging(LoggingConfig::from_cli(
        args.log_level.as_deref(),
        args.verbose,
        args.quiet,
    ));

    debug!("docwiz v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Scan(scan_args) => handle_scan(scan_args),
        Commands::Readme(readme_args) => handle_readme(readme_args),
    };

    std::process::exit(exit_code);
}
