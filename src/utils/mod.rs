pub mod persistence;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "hogar_core=warn";

/// Initializes the global tracing subscriber. Logs go to stderr so they never
/// interleave with the console report on stdout.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
