//! The `$validate` operation: gate, engine dispatch, outcome assembly.

use std::sync::Arc;
use tracing::{Instrument, debug, field, info_span};

use crate::assembler::{self, TransportStatus};
use crate::core::FeatureConfigWatch;
use crate::eligibility::{self, Eligibility};
use crate::engine::{ValidateOperationRequest, ValidationEngine};
use crate::error::Result;
use crate::types::{OperationOutcome, Resource};

/// Operation name as it appears in request URLs (`[type]/$validate`).
pub const VALIDATE_OPERATION_NAME: &str = "$validate";

/// Audit sub-type the operation is recorded under.
pub const VALIDATE_AUDIT_SUB_TYPE: &str = "read";

/// Outcome document plus the transport status to send with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateResponse {
    pub outcome: OperationOutcome,
    pub status: TransportStatus,
}

impl ValidateResponse {
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(&self.outcome)?)
    }
}

pub struct ValidateOperationHandler {
    features: FeatureConfigWatch,
    engine: Arc<dyn ValidationEngine>,
}

impl ValidateOperationHandler {
    pub fn new<E>(features: FeatureConfigWatch, engine: E) -> Self
    where
        E: ValidationEngine + 'static,
    {
        Self {
            features,
            engine: Arc::new(engine),
        }
    }

    pub fn features(&self) -> &FeatureConfigWatch {
        &self.features
    }

    /// Run `$validate` for one resource.
    ///
    /// A rejected request is an `Ok` response with status 400. `Err` is only
    /// returned when the engine exchange itself fails.
    pub async fn handle(&self, resource: &Resource) -> Result<ValidateResponse> {
        let resource_type = resource.resource_type();
        let span = info_span!(
            "validate",
            resource_type = %resource_type,
            request_id = field::Empty
        );

        async move {
            let decision = eligibility::evaluate(self.features.current(), resource_type);

            if let Eligibility::Reject(_) = decision {
                let (outcome, status) = assembler::build_rejection();
                return Ok(ValidateResponse { outcome, status });
            }

            let request = ValidateOperationRequest::new(resource.to_resource_element());
            tracing::Span::current().record("request_id", field::display(request.id));

            let response = self.engine.validate(request).await?;
            debug!(issue_count = response.issues.len(), "Validation engine replied");

            Ok(ValidateResponse {
                outcome: assembler::build_from_issues(response.issues),
                status: TransportStatus::default(),
            })
        }
        .instrument(span)
        .await
    }
}

impl std::fmt::Debug for ValidateOperationHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidateOperationHandler")
            .field("features", &self.features.current())
            .finish_non_exhaustive()
    }
}
