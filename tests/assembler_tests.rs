use octofhir_fhir_validate::*;
use proptest::prelude::*;
use serde_json::json;

fn any_severity() -> impl Strategy<Value = IssueSeverity> {
    proptest::sample::select(vec![
        IssueSeverity::Fatal,
        IssueSeverity::Error,
        IssueSeverity::Warning,
        IssueSeverity::Information,
    ])
}

fn any_code() -> impl Strategy<Value = IssueType> {
    proptest::sample::select(vec![
        IssueType::Invalid,
        IssueType::Structure,
        IssueType::Required,
        IssueType::Value,
        IssueType::Invariant,
        IssueType::NotSupported,
        IssueType::CodeInvalid,
        IssueType::Extension,
        IssueType::BusinessRule,
        IssueType::Informational,
    ])
}

fn any_issue() -> impl Strategy<Value = ValidationIssue> {
    (
        any_severity(),
        any_code(),
        "[A-Za-z0-9 .:\\[\\]]{0,40}",
        prop::collection::vec("[A-Z][a-z]{2,8}\\.[a-z]{2,8}", 0..3),
    )
        .prop_map(|(severity, code, diagnostics, expression)| ValidationIssue {
            severity,
            code,
            diagnostics,
            expression,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_issues_mapped_one_to_one(issues in prop::collection::vec(any_issue(), 0..20)) {
        let outcome = build_from_issues(issues.clone());

        prop_assert_eq!(outcome.len(), issues.len());
        for (entry, issue) in outcome.issues().iter().zip(&issues) {
            prop_assert_eq!(entry.severity, issue.severity);
            prop_assert_eq!(entry.code, issue.code);
            prop_assert_eq!(entry.diagnostics.as_deref(), Some(issue.diagnostics.as_str()));
            prop_assert_eq!(&entry.expression, &issue.expression);
        }
    }
}

#[test]
fn test_rejection_outcome() {
    let (outcome, status) = build_rejection();

    assert_eq!(status, TransportStatus::BadRequest);
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({
            "resourceType": "OperationOutcome",
            "issue": [{
                "severity": "error",
                "code": "not-supported",
                "diagnostics": "Not supported"
            }]
        })
    );
}

#[test]
fn test_rejection_is_stable() {
    assert_eq!(build_rejection(), build_rejection());
}

#[test]
fn test_empty_issue_list_is_clean_outcome() {
    let outcome = build_from_issues(Vec::new());

    assert!(outcome.is_empty());
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({"resourceType": "OperationOutcome"})
    );
}

#[test]
fn test_duplicates_are_kept() {
    let issue = ValidationIssue::error(IssueType::Invariant, "dom-6: A resource should have narrative");
    let outcome = build_from_issues(vec![issue.clone(), issue]);

    assert_eq!(outcome.len(), 2);
    assert_eq!(outcome.issues()[0], outcome.issues()[1]);
}

#[test]
fn test_engine_not_supported_issue_passes_through() {
    // An engine-reported not-supported issue is copied as-is; it does not turn into a rejection.
    let outcome = build_from_issues(vec![ValidationIssue::warning(
        IssueType::NotSupported,
        "Profile http://example.org/fhir/StructureDefinition/x is not loaded",
    )]);

    assert_eq!(outcome.issues()[0].severity, IssueSeverity::Warning);
    assert_eq!(outcome.issues()[0].code, IssueType::NotSupported);
}

#[test]
fn test_outcome_deserializes_from_fhir_json() {
    let outcome: OperationOutcome = serde_json::from_value(json!({
        "resourceType": "OperationOutcome",
        "issue": [{"severity": "warning", "code": "structure", "diagnostics": "minor issue"}]
    }))
    .unwrap();

    assert_eq!(
        outcome,
        build_from_issues(vec![ValidationIssue::warning(IssueType::Structure, "minor issue")])
    );
}
