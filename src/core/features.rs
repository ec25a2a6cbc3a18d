use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

use super::config::ServerValidationConfig;

/// Process-wide, hot-reloadable view of [`ServerValidationConfig`].
///
/// Readers take a snapshot with [`current`](Self::current) at call time and
/// never hold it across calls.
#[derive(Debug, Clone)]
pub struct FeatureConfigWatch {
    tx: Arc<watch::Sender<ServerValidationConfig>>,
}

impl FeatureConfigWatch {
    pub fn new(initial: ServerValidationConfig) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn current(&self) -> ServerValidationConfig {
        *self.tx.borrow()
    }

    /// Publish a new configuration. Calls already past their snapshot are unaffected.
    pub fn reload(&self, config: ServerValidationConfig) {
        let previous = self.tx.send_replace(config);
        if previous != config {
            info!(
                supports_validate = config.supports_validate,
                "Validation feature configuration reloaded"
            );
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ServerValidationConfig> {
        self.tx.subscribe()
    }
}

impl Default for FeatureConfigWatch {
    fn default() -> Self {
        Self::new(ServerValidationConfig::default())
    }
}

impl From<ServerValidationConfig> for FeatureConfigWatch {
    fn from(config: ServerValidationConfig) -> Self {
        Self::new(config)
    }
}
