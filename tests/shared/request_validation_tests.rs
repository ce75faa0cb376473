use axum::{Json, http::StatusCode};
use highlight_admin_api::{
    access_control::interfaces::rest::resources::assign_role_request_resource::AssignRoleRequestResource,
    shared::interfaces::rest::request_validation::validated_body,
};

#[test]
fn valid_body_passes_through() {
    let body = validated_body(Ok(Json(AssignRoleRequestResource {
        user_id: "U1".to_string(),
        role: "admin".to_string(),
    })))
    .expect("valid body");

    assert_eq!(body.user_id, "U1");
}

#[test]
fn missing_fields_deserialize_to_a_validation_error() {
    let request: AssignRoleRequestResource =
        serde_json::from_str("{}").expect("missing fields default to empty");

    let (status, Json(error)) =
        validated_body(Ok(Json(request))).expect_err("empty body must be rejected");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error.error, "userId and role are required");
}

#[test]
fn invalid_role_reports_allowed_values() {
    let (_, Json(error)) = validated_body(Ok(Json(AssignRoleRequestResource {
        user_id: "U1".to_string(),
        role: "Admin".to_string(),
    })))
    .expect_err("roles are case sensitive");

    assert_eq!(error.error, "Invalid role. Must be \"admin\" or \"client\"");
}

#[test]
fn single_assign_reports_missing_user_before_invalid_role() {
    let (_, Json(error)) = validated_body(Ok(Json(AssignRoleRequestResource {
        user_id: String::new(),
        role: "owner".to_string(),
    })))
    .expect_err("missing user id must be rejected");

    assert_eq!(error.error, "userId and role are required");
}
