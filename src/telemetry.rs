//! Logging setup for the `teamodes` binary.  The library only emits
//! `tracing` events; this is where they get a subscriber.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialise the tracing subscriber, writing to stderr so stdout stays
/// free for whatever the user pipes.
///
/// # Errors
///
/// Returns an error if the subscriber has already been set.
pub fn init(log_level: &str, json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let res = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    res.map_err(|e| anyhow::anyhow!("failed to initialise tracing subscriber: {e}"))
}
