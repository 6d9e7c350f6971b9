//! Tracing subscriber setup for the replay binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to whoever embeds it. `swipe-replay` logs to stderr so stdout stays pure
//! JSON.

use std::str::FromStr;

use color_eyre::{eyre::WrapErr, Result};
use tracing_subscriber::{
    filter::Directive, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Level used when neither `RUST_LOG` nor `--verbose` asks for more.
pub const DEFAULT_LEVEL: &str = "warn";

/// Level used with `--verbose`.
pub const VERBOSE_LEVEL: &str = "swipe_dismiss=debug";

/// Build the filter: `RUST_LOG` plus the level chosen by flags.
pub fn make_filter(verbose: bool) -> Result<EnvFilter> {
    let level = if verbose { VERBOSE_LEVEL } else { DEFAULT_LEVEL };
    Ok(EnvFilter::from_default_env()
        .add_directive(Directive::from_str(level).wrap_err("Invalid log level")?))
}

/// Install the global subscriber writing to stderr.
pub fn init_logging(verbose: bool) -> Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(make_filter(verbose)?);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .wrap_err("Failed to install global tracing subscriber")?;
    Ok(())
}
