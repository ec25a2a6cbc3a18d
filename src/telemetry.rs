use tracing_subscriber::EnvFilter;

use crate::core::MonitoringConfig;

/// Install the global tracing subscriber described by `config`.
///
/// `RUST_LOG`, when set, wins over `config.log_level`. Returns `false` if a
/// global subscriber was already installed.
pub fn init_tracing(config: &MonitoringConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    if config.structured_logging {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
