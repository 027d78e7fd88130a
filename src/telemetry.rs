//! Tracing subscriber setup for the binary.

use crate::config::LogFormat;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "books_api=info,tower_http=info";

/// Install the global subscriber. `RUST_LOG` overrides the default directives.
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
