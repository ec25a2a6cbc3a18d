use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Environment variable prefix, e.g. `FHIR_VALIDATE_FEATURES__SUPPORTS_VALIDATE=false`.
pub const ENV_PREFIX: &str = "FHIR_VALIDATE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Capability flags read by the operation at call time
    #[serde(default)]
    pub features: ServerValidationConfig,

    /// Validation engine dispatch settings
    #[serde(default)]
    pub engine: EngineConfig,

    /// Logging settings
    #[serde(default)]
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerValidationConfig {
    /// Whether `$validate` is offered at all
    #[serde(default = "default_true")]
    pub supports_validate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Engine calls allowed to run at once; as many again may queue in front of the worker
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitoringConfig {
    /// `EnvFilter` directive, e.g. `info` or `octofhir_fhir_validate=debug`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON log lines instead of the human-readable format
    #[serde(default)]
    pub structured_logging: bool,
}

impl ServerConfig {
    /// Load configuration: defaults, then the optional file, then `FHIR_VALIDATE_*`
    /// environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::build(path, None)
    }

    fn build(path: Option<&Path>, env: Option<config::Map<String, String>>) -> Result<Self> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        tracing::debug!(
            supports_validate = config.features.supports_validate,
            channel_capacity = config.engine.channel_capacity,
            "Loaded server configuration"
        );

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.engine.channel_capacity == 0 {
            return Err(config::ConfigError::Message(
                "engine.channel_capacity must be greater than 0".to_string(),
            )
            .into());
        }

        if let Err(e) = tracing_subscriber::EnvFilter::try_new(&self.monitoring.log_level) {
            return Err(config::ConfigError::Message(format!(
                "invalid monitoring.log_level '{}': {e}",
                self.monitoring.log_level
            ))
            .into());
        }

        Ok(())
    }

    pub fn with_features(mut self, features: ServerValidationConfig) -> Self {
        self.features = features;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            features: ServerValidationConfig::default(),
            engine: EngineConfig::default(),
            monitoring: MonitoringConfig::default(),
        }
    }
}

impl ServerValidationConfig {
    pub fn enabled() -> Self {
        Self {
            supports_validate: true,
        }
    }

    pub fn disabled() -> Self {
        Self {
            supports_validate: false,
        }
    }
}

impl Default for ServerValidationConfig {
    fn default() -> Self {
        Self::enabled()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            structured_logging: false,
        }
    }
}

fn default_true() -> bool { true }
fn default_channel_capacity() -> usize { 64 }
fn default_log_level() -> String { "info".to_string() }
