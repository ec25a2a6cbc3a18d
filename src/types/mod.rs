pub mod outcome;
pub mod resource;

pub use outcome::{IssueSeverity, IssueType, OperationOutcome, OutcomeIssue, ValidationIssue};
pub use resource::{Resource, ResourceElement, ResourceType};
