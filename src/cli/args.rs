//! Command-line argument parsing for swipe-replay.

use std::path::PathBuf;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Play a replay script
    Replay {
        script: PathBuf,
        config: Option<PathBuf>,
        verbose: bool,
    },
    /// Arguments could not be understood
    Invalid(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// # Examples
///
/// ```
/// use swipe_dismiss::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["swipe-replay".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut script = None;
    let mut config = None;
    let mut verbose = false;

    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--verbose" | "-v" => verbose = true,
            "--config" | "-c" => match args.next() {
                Some(path) => config = Some(PathBuf::from(path)),
                None => return CliCommand::Invalid("--config needs a path".to_string()),
            },
            flag if flag.starts_with('-') && flag != "-" => {
                return CliCommand::Invalid(format!("unknown flag {}", flag));
            }
            path => {
                if script.is_some() {
                    return CliCommand::Invalid(format!("unexpected argument {}", path));
                }
                script = Some(PathBuf::from(path));
            }
        }
    }

    match script {
        Some(script) => CliCommand::Replay {
            script,
            config,
            verbose,
        },
        None => CliCommand::Invalid("missing replay script".to_string()),
    }
}
