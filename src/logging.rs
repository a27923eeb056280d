use std::sync::OnceLock;

use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, time::SystemTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

static INSTALL_GUARD: OnceLock<()> = OnceLock::new();

/// Installs the global subscriber once. `RUST_LOG` wins over `default_filter`.
///
/// Engine events go through the `log` facade and are bridged by [`LogTracer`].
pub fn init_tracing(default_filter: &str) {
    INSTALL_GUARD.get_or_init(|| {
        if LogTracer::init().is_err() {
            // A logger is already installed; keep it.
        }

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

        let fmt_layer = fmt::layer()
            .with_timer(SystemTime)
            .with_target(false)
            .with_ansi(false)
            .compact();

        if tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .is_err()
        {
            // Global subscriber already installed elsewhere; ignore.
        }
    });
}
