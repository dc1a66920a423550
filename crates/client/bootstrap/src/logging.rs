//! Tracing subscriber setup for front-ends.
use tracing_subscriber::EnvFilter;

/// Installs a formatted subscriber writing to stderr.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Returns false if
/// a global subscriber was already installed.
pub fn init_logging() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
