// Logger initialization
use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber, filtering at the given level.
///
/// Diagnostics go to stderr so rendered output on stdout stays clean.
pub fn init(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
