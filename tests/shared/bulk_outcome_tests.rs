use highlight_admin_api::shared::{
    domain::model::bulk_operation_outcome::BulkOperationOutcome,
    interfaces::rest::resources::bulk_operation_response_resource::BulkOperationResponseResource,
};
use serde_json::json;

#[test]
fn outcome_tracks_successes_and_failures() {
    let mut outcome = BulkOperationOutcome::new();
    outcome.record_success();
    outcome.record_failure("U2", "delete failed");
    outcome.record_success();

    assert_eq!(outcome.success_count(), 2);
    assert_eq!(outcome.failure_count(), 1);
    assert_eq!(outcome.total(), 3);
    assert!(outcome.is_partial_failure());
}

#[test]
fn complete_failure_is_not_partial() {
    let mut outcome = BulkOperationOutcome::new();
    outcome.record_failure("U1", "boom");

    assert!(!outcome.is_partial_failure());
}

#[test]
fn response_uses_camel_case_and_lists_errors() {
    let mut outcome = BulkOperationOutcome::new();
    outcome.record_success();
    outcome.record_failure("U2", "delete failed");

    let body = serde_json::to_value(BulkOperationResponseResource::from(outcome))
        .expect("serializable response");

    assert_eq!(
        body,
        json!({
            "success": true,
            "successCount": 1,
            "failureCount": 1,
            "errors": [{ "userId": "U2", "error": "delete failed" }],
        })
    );
}
