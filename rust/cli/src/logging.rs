//! Subscriber setup for agent traces.

use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber when `verbose` is set or `RUST_LOG` is
/// present. Safe to call more than once; later calls are ignored.
pub fn init_logging(verbose: bool) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if verbose => EnvFilter::new("warn,drawbot_ai=debug"),
        Err(_) => return,
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
