use thiserror::Error;

use crate::assembler::TransportStatus;

#[derive(Error, Debug)]
pub enum ValidateOperationError {
    #[error("Validation engine error: {message}")]
    Engine { message: String },

    #[error("Validation engine unavailable: {message}")]
    EngineUnavailable { message: String },

    #[error("Invalid resource: {message}")]
    InvalidResource { message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ValidateOperationError>;

impl ValidateOperationError {
    pub fn engine(message: impl Into<String>) -> Self {
        Self::Engine {
            message: message.into(),
        }
    }

    pub fn engine_unavailable(message: impl Into<String>) -> Self {
        Self::EngineUnavailable {
            message: message.into(),
        }
    }

    pub fn invalid_resource(message: impl Into<String>) -> Self {
        Self::InvalidResource {
            message: message.into(),
        }
    }

    /// Transport status the surrounding layer should report for this error.
    ///
    /// The business rejection ("not supported") never reaches this path; it is
    /// an ordinary outcome built by [`crate::assembler::build_rejection`].
    pub fn status_code(&self) -> TransportStatus {
        match self {
            Self::InvalidResource { .. } | Self::Serialization(_) => TransportStatus::BadRequest,
            Self::Engine { .. } | Self::Config(_) => TransportStatus::InternalServerError,
            Self::EngineUnavailable { .. } => TransportStatus::ServiceUnavailable,
        }
    }

    /// Stable error code for logs and API payloads.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Engine { .. } => "ENGINE_ERROR",
            Self::EngineUnavailable { .. } => "ENGINE_UNAVAILABLE",
            Self::InvalidResource { .. } => "INVALID_RESOURCE",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Serialization(_) => "JSON_ERROR",
        }
    }
}
