use clap::Parser;
use std::path::PathBuf;

/// Default accounts file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "accounts.txt";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Interactive console for managing bank accounts
#[derive(Parser, Debug)]
#[command(name = "console-bank")]
#[command(about = "Interactive console for managing bank accounts", long_about = None)]
pub struct CliArgs {
    /// Accounts file loaded at startup and saved on exit
    #[arg(
        long = "data-file",
        value_name = "PATH",
        default_value = DEFAULT_DATA_FILE,
        help = "Accounts file loaded at startup and saved on exit"
    )]
    pub data_file: PathBuf,

    /// Diagnostic log filter, written to stderr
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        default_value = DEFAULT_LOG_LEVEL,
        help = "Log filter for diagnostics on stderr (overridden by RUST_LOG)"
    )]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::defaults(&["program"], "accounts.txt", "warn")]
    #[case::custom_file(&["program", "--data-file", "data/bank.txt"], "data/bank.txt", "warn")]
    #[case::custom_level(&["program", "--log-level", "debug"], "accounts.txt", "debug")]
    #[case::all_options(
        &["program", "--data-file", "/tmp/a.txt", "--log-level", "console_bank=info"],
        "/tmp/a.txt",
        "console_bank=info"
    )]
    fn test_args_parsing(
        #[case] args: &[&str],
        #[case] expected_file: &str,
        #[case] expected_level: &str,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();

        assert_eq!(parsed.data_file, PathBuf::from(expected_file));
        assert_eq!(parsed.log_level, expected_level);
    }

    #[rstest]
    #[case::unknown_flag(&["program", "--verbose"])]
    #[case::missing_value(&["program", "--data-file"])]
    #[case::positional(&["program", "accounts.txt"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
