// CLI module
// Command-line arguments and diagnostics setup

mod args;
mod logging;

pub use args::{CliArgs, DEFAULT_DATA_FILE, DEFAULT_LOG_LEVEL};
pub use logging::init_logging;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (unknown flag, missing value, or --help), clap prints the
/// error or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
