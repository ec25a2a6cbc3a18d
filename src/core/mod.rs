pub mod config;
pub mod features;

pub use config::{EngineConfig, MonitoringConfig, ServerConfig, ServerValidationConfig};
pub use features::FeatureConfigWatch;
