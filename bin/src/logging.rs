//! Log subscriber setup.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Level used when neither flags nor environment choose one.
const DEFAULT_LEVEL: &str = "info";

/// Picks the filter directive for the given flags.
///
/// `-q` and `-v` win over the environment. Otherwise `RUST_LOG` is used
/// when set, then `LOG_LEVEL`, then [`DEFAULT_LEVEL`].
fn directive(verbose: u8, quiet: bool, env: impl Fn(&str) -> Option<String>) -> String {
    match (quiet, verbose) {
        (true, _) => "error".to_string(),
        (false, 1) => "debug".to_string(),
        (false, 2..) => "trace".to_string(),
        (false, 0) => env("RUST_LOG")
            .or_else(|| env("LOG_LEVEL"))
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
    }
}

/// Installs the global subscriber. Logs go to stderr so stdout stays
/// machine-readable.
pub(crate) fn init(verbose: u8, quiet: bool) -> Result<()> {
    let directive = directive(verbose, quiet, |name| std::env::var(name).ok());
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| anyhow!("invalid log filter '{directive}': {e}"))?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
