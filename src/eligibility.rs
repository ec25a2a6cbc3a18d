//! Decides whether `$validate` may run for a submitted resource.

use tracing::debug;

use crate::core::ServerValidationConfig;
use crate::types::ResourceType;

/// Resource type that carries operation inputs and is never itself validated.
pub const RESERVED_RESOURCE_TYPE: ResourceType = ResourceType::Parameters;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Proceed,
    Reject(RejectionReason),
}

/// Why a request was rejected.
///
/// Only used for logging; both reasons produce the same response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    FeatureDisabled,
    ReservedResourceType,
}

impl Eligibility {
    pub fn is_proceed(&self) -> bool {
        matches!(self, Eligibility::Proceed)
    }

    pub fn is_reject(&self) -> bool {
        !self.is_proceed()
    }
}

impl RejectionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionReason::FeatureDisabled => "feature-disabled",
            RejectionReason::ReservedResourceType => "reserved-resource-type",
        }
    }
}

pub fn evaluate(config: ServerValidationConfig, resource_type: ResourceType) -> Eligibility {
    let result = if !config.supports_validate {
        Eligibility::Reject(RejectionReason::FeatureDisabled)
    } else if resource_type == RESERVED_RESOURCE_TYPE {
        Eligibility::Reject(RejectionReason::ReservedResourceType)
    } else {
        Eligibility::Proceed
    };

    if let Eligibility::Reject(reason) = result {
        debug!(
            resource_type = %resource_type,
            reason = reason.as_str(),
            "Validation rejected"
        );
    }

    result
}
