//! Diagnostic logging setup.
//!
//! Logs go to stderr only; stdout is reserved for the one-name-per-line
//! progress stream. The filter is read from `RUST_LOG` and defaults to `warn`.

use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Calling it again is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let with_ansi = !cfg!(windows);
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(with_ansi)
        .with_target(false);

    let collector = tracing_subscriber::registry().with(console_layer).with(filter);
    if tracing::subscriber::set_global_default(collector).is_ok() {
        let log_var = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string());
        tracing::debug!("Logging initiated to stderr with RUST_LOG=\"{log_var}\"");
    }
}
