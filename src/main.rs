use swipe_dismiss::cli::{parse_args, run_cli_command, CliCommand};
use swipe_dismiss::logging::init_logging;

use color_eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args());
    if let CliCommand::Replay { verbose, .. } = &command {
        init_logging(*verbose)?;
    }

    run_cli_command(command)
}
