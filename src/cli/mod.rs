//! Command-line handling.
//!
//! Flags are checked before the terminal is touched:
//!
//! ```ignore
//! use stackq::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(command) {
//!     result?;
//!     return Ok(());
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod help;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use help::handle_help_command;
pub use version::{handle_version_command, VERSION};

use color_eyre::Result;

/// Run a CLI command if applicable.
///
/// Returns `None` for [`CliCommand::RunTui`]. `Version` and `Help` print and
/// exit the process.
pub fn run_cli_command(command: CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::RunTui => None,
    }
}
