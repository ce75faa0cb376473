use highlight_admin_api::iam_integration::interfaces::acl::admin_authorization_gate::{
    AdminAuthorizationError, AdminAuthorizationGate,
};

use crate::support::create_gate_harness;

#[tokio::test]
async fn admin_caller_is_resolved_to_principal() {
    let harness = create_gate_harness();
    harness.iam.register("token-a1", "A1", Some("a1@example.com"));
    harness.privileges.grant_admin("A1");

    let principal = harness
        .gate
        .authorize_admin(Some("Bearer token-a1"))
        .await
        .expect("admin should pass the gate");

    assert_eq!(principal.user_id().value(), "A1");
    assert_eq!(principal.email(), Some("a1@example.com"));
    assert_eq!(
        harness.privileges.checks(),
        vec![("A1".to_string(), "admin".to_string())]
    );
}

#[tokio::test]
async fn missing_header_is_rejected_without_calling_iam() {
    let harness = create_gate_harness();

    let result = harness.gate.authorize_admin(None).await;

    assert!(matches!(
        result,
        Err(AdminAuthorizationError::MissingAuthentication)
    ));
    assert_eq!(harness.iam.verify_calls(), 0);
}

#[tokio::test]
async fn non_bearer_scheme_is_invalid() {
    let harness = create_gate_harness();

    let basic = harness.gate.authorize_admin(Some("Basic dXNlcjpwYXNz")).await;
    let empty_bearer = harness.gate.authorize_admin(Some("Bearer   ")).await;

    assert!(matches!(
        basic,
        Err(AdminAuthorizationError::InvalidAuthentication(_))
    ));
    assert!(matches!(
        empty_bearer,
        Err(AdminAuthorizationError::InvalidAuthentication(_))
    ));
    assert_eq!(harness.iam.verify_calls(), 0);
}

#[tokio::test]
async fn unknown_token_is_invalid() {
    let harness = create_gate_harness();

    let result = harness.gate.authorize_admin(Some("Bearer nope")).await;

    assert!(matches!(
        result,
        Err(AdminAuthorizationError::InvalidAuthentication(_))
    ));
    assert!(harness.privileges.checks().is_empty());
}

#[tokio::test]
async fn non_admin_is_denied() {
    let harness = create_gate_harness();
    harness.iam.register("token-c1", "C1", None);

    let result = harness.gate.authorize_admin(Some("Bearer token-c1")).await;

    assert!(matches!(result, Err(AdminAuthorizationError::AccessDenied)));
}

#[tokio::test]
async fn privilege_lookup_failure_is_distinct_from_denial() {
    let harness = create_gate_harness();
    harness.iam.register("token-a1", "A1", None);
    harness.privileges.set_failing();

    let result = harness.gate.authorize_admin(Some("Bearer token-a1")).await;

    assert!(matches!(
        result,
        Err(AdminAuthorizationError::PrivilegeCheckFailed(_))
    ));
}

#[tokio::test]
async fn identity_provider_outage_is_reported_as_unavailable() {
    let harness = create_gate_harness();
    harness.iam.set_unavailable();

    let result = harness.gate.authorize_admin(Some("Bearer token-a1")).await;

    assert!(matches!(
        result,
        Err(AdminAuthorizationError::IamUnavailable(_))
    ));
}
