use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    routing::post,
};

use crate::{
    iam_integration::interfaces::{
        acl::admin_authorization_gate::AdminAuthorizationGate,
        rest::admin_request_authorization::authorize_admin_request,
    },
    shared::interfaces::rest::{
        request_validation::validated_body,
        resources::{
            bulk_operation_response_resource::BulkOperationResponseResource,
            error_response_resource::ErrorResponseResource,
        },
    },
    user_management::{
        domain::{
            model::{
                commands::bulk_delete_users_command::BulkDeleteUsersCommand,
                enums::user_management_domain_error::UserManagementDomainError,
            },
            services::user_management_command_service::UserManagementCommandService,
        },
        interfaces::rest::resources::bulk_delete_users_request_resource::BulkDeleteUsersRequestResource,
    },
};

#[derive(Clone)]
pub struct UserManagementRestControllerState {
    pub command_service: Arc<dyn UserManagementCommandService>,
    pub authorization_gate: Arc<dyn AdminAuthorizationGate>,
}

pub fn router(state: UserManagementRestControllerState) -> Router {
    Router::new()
        .route("/functions/v1/bulk-delete-users", post(bulk_delete_users))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/functions/v1/bulk-delete-users",
    tag = "user-management",
    request_body = BulkDeleteUsersRequestResource,
    responses(
        (status = 200, description = "Per-user outcome; failures are listed in `errors`", body = BulkOperationResponseResource),
        (status = 400, description = "Empty user list, or the list contains the caller", body = ErrorResponseResource),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponseResource),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponseResource),
        (status = 503, description = "Identity provider unavailable", body = ErrorResponseResource)
    ),
    security(("bearerAuth" = []))
)]
pub async fn bulk_delete_users(
    State(state): State<UserManagementRestControllerState>,
    headers: HeaderMap,
    payload: Result<Json<BulkDeleteUsersRequestResource>, JsonRejection>,
) -> Result<Json<BulkOperationResponseResource>, (StatusCode, Json<ErrorResponseResource>)> {
    let principal =
        authorize_admin_request(state.authorization_gate.as_ref(), &headers).await?;
    let request = validated_body(payload)?;

    let command = BulkDeleteUsersCommand::new(
        principal.user_id().as_string(),
        principal.email().map(str::to_string),
        request.user_ids,
    )
    .map_err(map_domain_error)?;

    let outcome = state
        .command_service
        .handle_bulk_delete_users(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(outcome.into()))
}

fn map_domain_error(
    error: UserManagementDomainError,
) -> (StatusCode, Json<ErrorResponseResource>) {
    let status = match error {
        UserManagementDomainError::InvalidUserId
        | UserManagementDomainError::EmptyUserIdList
        | UserManagementDomainError::SelfDeletionForbidden => StatusCode::BAD_REQUEST,
        UserManagementDomainError::UserNotFound
        | UserManagementDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(ErrorResponseResource::new(error.to_string())))
}
