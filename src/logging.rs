use tracing_subscriber::EnvFilter;

#[cfg(debug_assertions)]
const DEFAULT_FILTER: &str = "qrmaster=debug,info";

#[cfg(not(debug_assertions))]
const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber, `RUST_LOG` overrides the default filter
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // a host app or an earlier init may already own the global subscriber
    if let Err(error) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        tracing::debug!("logging already initialized: {error}");
    }
}
