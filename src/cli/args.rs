//! Command-line argument parsing.

/// What the process was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print the version and exit
    Version,
    /// Print usage and exit
    Help,
    /// Start the search UI (default)
    RunTui,
}

/// Parse command-line arguments, program name first.
///
/// The first recognised flag wins; anything unrecognised starts the UI.
///
/// # Examples
///
/// ```
/// use stackq::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["stackq".to_string(), "--help".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Help);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            _ => {}
        }
    }
    CliCommand::RunTui
}
