//! CLI module for swipe-replay.
//!
//! - Argument parsing
//! - Version display
//! - Replay script playback
//!
//! ```ignore
//! use swipe_dismiss::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Err(e) = run_cli_command(command) {
//!     eprintln!("Error: {:?}", e);
//!     std::process::exit(1);
//! }
//! ```

pub mod args;
pub mod replay;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use replay::{handle_replay_command, play_script, write_report};
pub use version::{handle_version_command, version_line, VERSION};

use std::io;

use color_eyre::{eyre::eyre, Result};

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: swipe-replay [OPTIONS] <SCRIPT>

Play a swipe replay script and print one JSON record per step.
Use `-` as SCRIPT to read from stdin.

Options:
  -c, --config <PATH>  Swipe config file (default: user config dir)
  -v, --verbose        Log gesture transitions to stderr
  -h, --help           Show this help
  -V, --version        Show version";

/// Run a parsed CLI command.
pub fn run_cli_command(command: CliCommand) -> Result<()> {
    match command {
        CliCommand::Version => {
            handle_version_command();
            Ok(())
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        CliCommand::Replay { script, config, .. } => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            handle_replay_command(&script, config.as_deref(), &mut out)?;
            Ok(())
        }
        CliCommand::Invalid(message) => Err(eyre!("{}\n\n{}", message, USAGE)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_command_is_an_error() {
        let err = run_cli_command(CliCommand::Invalid("missing replay script".to_string()))
            .unwrap_err();
        assert!(err.to_string().starts_with("missing replay script"));
    }

    #[test]
    fn test_usage_mentions_every_flag() {
        for flag in ["--config", "--verbose", "--help", "--version"] {
            assert!(USAGE.contains(flag), "usage is missing {}", flag);
        }
    }
}
