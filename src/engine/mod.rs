//! Boundary to the validation engine.
//!
//! The engine itself lives outside this crate. Callers reach it through the
//! [`ValidationEngine`] trait, either directly in-process or via the
//! channel-backed [`EngineHandle`] returned by [`EngineDispatcher::spawn`].

pub mod dispatcher;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::Result;
use crate::types::{ResourceElement, ValidationIssue};

pub use dispatcher::{EngineDispatcher, EngineHandle};

/// Request sent to the validation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateOperationRequest {
    /// Correlates engine logs with the originating call
    pub id: Uuid,
    pub resource: ResourceElement,
}

impl ValidateOperationRequest {
    pub fn new(resource: ResourceElement) -> Self {
        Self {
            id: Uuid::new_v4(),
            resource,
        }
    }
}

/// Engine reply: issues in the order the engine considers significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateOperationResponse {
    #[serde(default)]
    pub issues: Vec<ValidationIssue>,
}

impl ValidateOperationResponse {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }
}

#[async_trait]
pub trait ValidationEngine: Send + Sync {
    async fn validate(&self, request: ValidateOperationRequest) -> Result<ValidateOperationResponse>;
}

#[async_trait]
impl<T: ValidationEngine + ?Sized> ValidationEngine for Arc<T> {
    async fn validate(&self, request: ValidateOperationRequest) -> Result<ValidateOperationResponse> {
        (**self).validate(request).await
    }
}
