use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

use crate::args::LogLevel;

static INIT: OnceCell<()> = OnceCell::new();

/// Install the global tracing subscriber. Subsequent calls are no-ops.
///
/// `RUST_LOG` overrides the flag so targeted per-module filters keep
/// working.
pub fn init(level: LogLevel) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
