//! # OctoFHIR `$validate`
//!
//! Decision and response-assembly core for the FHIR `$validate` operation.
//!
//! ## Features
//!
//! - **Eligibility gate**: decides from server configuration and resource type
//!   whether validation may run at all
//! - **Engine boundary**: async request/response contract with an external
//!   validation engine, in-process or behind a message channel
//! - **Outcome assembly**: maps engine issues onto a FHIR `OperationOutcome`,
//!   or produces the fixed "not supported" rejection with status 400
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use octofhir_fhir_validate::*;
//! use serde_json::json;
//!
//! # struct MyEngine;
//! # #[async_trait::async_trait]
//! # impl ValidationEngine for MyEngine {
//! #     async fn validate(&self, _: ValidateOperationRequest) -> Result<ValidateOperationResponse> {
//! #         Ok(ValidateOperationResponse::default())
//! #     }
//! # }
//! # async fn example() -> Result<()> {
//! let config = ServerConfig::load(None)?;
//! let engine = EngineDispatcher::spawn_with_config(MyEngine, &config.engine);
//! let handler = ValidateOperationHandler::new(FeatureConfigWatch::new(config.features), engine);
//!
//! let resource = Resource::from_json(json!({"resourceType": "Patient", "id": "pt-1"}))?;
//! let response = handler.handle(&resource).await?;
//! println!("{} {}", response.status, response.to_json()?);
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod core;
pub mod eligibility;
pub mod engine;
pub mod error;
pub mod operation;
pub mod telemetry;
pub mod types;

pub use assembler::{NOT_SUPPORTED_DIAGNOSTICS, TransportStatus, build_from_issues, build_rejection};
pub use crate::core::{
    EngineConfig, FeatureConfigWatch, MonitoringConfig, ServerConfig, ServerValidationConfig,
};
pub use eligibility::{Eligibility, RESERVED_RESOURCE_TYPE, RejectionReason, evaluate};
pub use engine::{
    EngineDispatcher, EngineHandle, ValidateOperationRequest, ValidateOperationResponse,
    ValidationEngine,
};
pub use error::{Result, ValidateOperationError};
pub use operation::{
    VALIDATE_AUDIT_SUB_TYPE, VALIDATE_OPERATION_NAME, ValidateOperationHandler, ValidateResponse,
};
pub use telemetry::init_tracing;
pub use types::{
    IssueSeverity, IssueType, OperationOutcome, OutcomeIssue, Resource, ResourceElement,
    ResourceType, ValidationIssue,
};
