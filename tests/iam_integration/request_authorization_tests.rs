use axum::http::{HeaderMap, HeaderValue, StatusCode, header::AUTHORIZATION};
use highlight_admin_api::iam_integration::interfaces::{
    acl::admin_authorization_gate::AdminAuthorizationError,
    rest::admin_request_authorization::{authorize_admin_request, map_admin_authorization_error},
};

use crate::support::create_gate_harness;

#[test]
fn authorization_errors_map_to_distinct_statuses() {
    let cases = [
        (AdminAuthorizationError::MissingAuthentication, StatusCode::UNAUTHORIZED),
        (
            AdminAuthorizationError::InvalidAuthentication("bad".to_string()),
            StatusCode::UNAUTHORIZED,
        ),
        (AdminAuthorizationError::AccessDenied, StatusCode::FORBIDDEN),
        (
            AdminAuthorizationError::IamUnavailable("down".to_string()),
            StatusCode::SERVICE_UNAVAILABLE,
        ),
        (
            AdminAuthorizationError::PrivilegeCheckFailed("db".to_string()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (error, expected) in cases {
        let (status, _) = map_admin_authorization_error(error);
        assert_eq!(status, expected);
    }
}

#[test]
fn missing_authentication_body_matches_public_contract() {
    let (_, body) = map_admin_authorization_error(AdminAuthorizationError::MissingAuthentication);

    assert_eq!(body.error, "Authorization required");
    assert!(body.details.is_none());
}

#[tokio::test]
async fn request_headers_are_passed_to_the_gate() {
    let harness = create_gate_harness();
    harness.iam.register("token-a1", "A1", None);
    harness.privileges.grant_admin("A1");

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer token-a1"));

    let principal = authorize_admin_request(&harness.gate, &headers)
        .await
        .expect("admin request should be authorized");

    assert_eq!(principal.user_id().value(), "A1");
}
