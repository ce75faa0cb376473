use axum::{
    Json,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
};

use crate::{
    iam_integration::{
        domain::model::entities::authenticated_principal::AuthenticatedPrincipal,
        interfaces::acl::admin_authorization_gate::{
            AdminAuthorizationError, AdminAuthorizationGate,
        },
    },
    shared::interfaces::rest::resources::error_response_resource::ErrorResponseResource,
};

pub async fn authorize_admin_request(
    gate: &dyn AdminAuthorizationGate,
    headers: &HeaderMap,
) -> Result<AuthenticatedPrincipal, (StatusCode, Json<ErrorResponseResource>)> {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    gate.authorize_admin(authorization)
        .await
        .map_err(map_admin_authorization_error)
}

pub fn map_admin_authorization_error(
    error: AdminAuthorizationError,
) -> (StatusCode, Json<ErrorResponseResource>) {
    match error {
        AdminAuthorizationError::MissingAuthentication => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponseResource::new(error.to_string())),
        ),
        AdminAuthorizationError::AccessDenied => (
            StatusCode::FORBIDDEN,
            Json(ErrorResponseResource::new(error.to_string())),
        ),
        AdminAuthorizationError::InvalidAuthentication(details) => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponseResource::with_details(
                "Invalid authorization",
                details,
            )),
        ),
        AdminAuthorizationError::IamUnavailable(details) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponseResource::with_details(
                "Identity provider unavailable",
                details,
            )),
        ),
        AdminAuthorizationError::PrivilegeCheckFailed(details) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponseResource::with_details(
                "Error checking permissions",
                details,
            )),
        ),
    }
}
