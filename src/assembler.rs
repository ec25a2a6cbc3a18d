//! Builds `OperationOutcome` documents for `$validate` responses.
//!
//! Two paths exist:
//! - [`build_rejection`] - the fixed "not supported" outcome paired with 400
//! - [`build_from_issues`] - engine issues copied 1:1, status left to the caller

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{IssueSeverity, IssueType, OperationOutcome, OutcomeIssue, ValidationIssue};

/// Diagnostics text of the rejection outcome.
pub const NOT_SUPPORTED_DIAGNOSTICS: &str = "Not supported";

/// Transport-level status reported alongside an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransportStatus {
    #[default]
    Ok,
    BadRequest,
    InternalServerError,
    ServiceUnavailable,
}

impl TransportStatus {
    pub fn as_u16(&self) -> u16 {
        match self {
            TransportStatus::Ok => 200,
            TransportStatus::BadRequest => 400,
            TransportStatus::InternalServerError => 500,
            TransportStatus::ServiceUnavailable => 503,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.as_u16())
    }
}

impl fmt::Display for TransportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

impl From<TransportStatus> for u16 {
    fn from(status: TransportStatus) -> Self {
        status.as_u16()
    }
}

/// Outcome for a request the eligibility gate turned away.
///
/// Always a single error/not-supported issue with status 400, whatever the
/// reason for the rejection.
pub fn build_rejection() -> (OperationOutcome, TransportStatus) {
    let outcome = OperationOutcome::new().with_issue(OutcomeIssue {
        severity: IssueSeverity::Error,
        code: IssueType::NotSupported,
        diagnostics: Some(NOT_SUPPORTED_DIAGNOSTICS.to_string()),
        expression: Vec::new(),
    });

    (outcome, TransportStatus::BadRequest)
}

/// Outcome carrying the engine's issues, in the order the engine reported them.
pub fn build_from_issues<I>(issues: I) -> OperationOutcome
where
    I: IntoIterator<Item = ValidationIssue>,
{
    OperationOutcome {
        issue: issues.into_iter().map(OutcomeIssue::from).collect(),
    }
}
