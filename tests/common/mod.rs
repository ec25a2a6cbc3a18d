use async_trait::async_trait;
use octofhir_fhir_validate::*;
use serde_json::json;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Engine that answers every request with the same issue list.
#[allow(dead_code)]
pub struct CannedEngine {
    issues: Vec<ValidationIssue>,
    calls: AtomicUsize,
    seen: Mutex<Vec<ValidateOperationRequest>>,
}

#[allow(dead_code)]
impl CannedEngine {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self {
            issues,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn clean() -> Self {
        Self::new(Vec::new())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<ValidateOperationRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ValidationEngine for CannedEngine {
    async fn validate(&self, request: ValidateOperationRequest) -> Result<ValidateOperationResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(request);
        Ok(ValidateOperationResponse::new(self.issues.clone()))
    }
}

/// Engine that always fails.
#[allow(dead_code)]
pub struct FailingEngine;

#[async_trait]
impl ValidationEngine for FailingEngine {
    async fn validate(&self, _request: ValidateOperationRequest) -> Result<ValidateOperationResponse> {
        Err(ValidateOperationError::engine("profile store offline"))
    }
}

/// Engine that reports the submitted resource id back as an informational issue.
#[allow(dead_code)]
pub struct EchoIdEngine;

#[async_trait]
impl ValidationEngine for EchoIdEngine {
    async fn validate(&self, request: ValidateOperationRequest) -> Result<ValidateOperationResponse> {
        tokio::task::yield_now().await;
        let id = request.resource.id.unwrap_or_default();
        Ok(ValidateOperationResponse::new(vec![ValidationIssue::information(
            IssueType::Informational,
            id,
        )]))
    }
}

#[allow(dead_code)]
pub fn patient(id: &str) -> Resource {
    Resource::from_json(json!({
        "resourceType": "Patient",
        "id": id,
        "name": [{"family": "Chalmers", "given": ["Peter"]}]
    }))
    .unwrap()
}

#[allow(dead_code)]
pub fn parameters() -> Resource {
    Resource::from_json(json!({
        "resourceType": "Parameters",
        "parameter": [{"name": "mode", "valueCode": "create"}]
    }))
    .unwrap()
}

#[allow(dead_code)]
pub fn handler_with<E: ValidationEngine + 'static>(
    features: ServerValidationConfig,
    engine: E,
) -> ValidateOperationHandler {
    ValidateOperationHandler::new(FeatureConfigWatch::new(features), engine)
}
