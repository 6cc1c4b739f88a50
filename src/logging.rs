//! Tracing setup for the `dogparks` binary.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default log level for the given verbosity. `RUST_LOG` takes precedence.
pub fn default_level(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::WARN }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(verbose: bool) {
    let default_filter = format!("dogparks={}", default_level(verbose));
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}
