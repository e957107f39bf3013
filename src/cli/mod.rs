pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, Commands, OutputFormatArg, ReadmeArgs, ScanArgs, WalkArgs};
pub use output::{OutputFormat, OutputFormatter, ScanReport};
