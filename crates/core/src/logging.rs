use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a global `tracing` subscriber with an env-driven filter.
///
/// Frontends call this once at startup; the library itself never does.
/// `RUST_LOG` overrides the default `finance_tracker_core=info` directive.
/// Later calls are no-ops, as is a call made after another subscriber
/// was installed elsewhere.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("finance_tracker_core=info"));

        let _ = fmt().with_env_filter(filter).try_init();
    });
}
