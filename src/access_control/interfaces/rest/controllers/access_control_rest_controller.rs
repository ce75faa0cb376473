use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};

use crate::{
    access_control::{
        domain::{
            model::{
                commands::{
                    assign_role_command::AssignRoleCommand,
                    bulk_assign_role_command::BulkAssignRoleCommand,
                },
                enums::access_control_domain_error::AccessControlDomainError,
                queries::list_role_audit_logs_query::ListRoleAuditLogsQuery,
            },
            services::{
                access_control_command_service::AccessControlCommandService,
                access_control_query_service::AccessControlQueryService,
            },
        },
        interfaces::rest::resources::{
            assign_role_request_resource::AssignRoleRequestResource,
            assign_role_response_resource::{
                AssignRoleResponseResource, ROLE_ALREADY_HELD_MESSAGE, ROLE_ASSIGNED_MESSAGE,
            },
            bulk_assign_role_request_resource::BulkAssignRoleRequestResource,
            role_audit_log_resource::{ListRoleAuditLogsQueryResource, RoleAuditLogResource},
        },
    },
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
};

#[derive(Clone)]
pub struct AccessControlRestControllerState {
    pub command_service: Arc<dyn AccessControlCommandService>,
    pub query_service: Arc<dyn AccessControlQueryService>,
    pub authorization_gate: Arc<dyn AdminAuthorizationGate>,
}

pub fn router(state: AccessControlRestControllerState) -> Router {
    Router::new()
        .route("/functions/v1/assign-role", post(assign_role))
        .route("/functions/v1/bulk-assign-role", post(bulk_assign_role))
        .route("/admin/role-audit-logs", get(list_role_audit_logs))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/functions/v1/assign-role",
    tag = "access-control",
    request_body = AssignRoleRequestResource,
    responses(
        (status = 200, description = "Role assigned, or already held", body = AssignRoleResponseResource),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponseResource),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponseResource),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponseResource),
        (status = 500, description = "Storage failure", body = ErrorResponseResource),
        (status = 503, description = "Identity provider unavailable", body = ErrorResponseResource)
    ),
    security(("bearerAuth" = []))
)]
pub async fn assign_role(
    State(state): State<AccessControlRestControllerState>,
    headers: HeaderMap,
    payload: Result<Json<AssignRoleRequestResource>, JsonRejection>,
) -> Result<Json<AssignRoleResponseResource>, (StatusCode, Json<ErrorResponseResource>)> {
    let principal =
        authorize_admin_request(state.authorization_gate.as_ref(), &headers).await?;
    let request = validated_body(payload)?;

    let command = AssignRoleCommand::new(
        principal.user_id().as_string(),
        request.user_id,
        request.role,
    )
    .map_err(map_domain_error)?;

    let result = state
        .command_service
        .handle_assign_role(command)
        .await
        .map_err(map_domain_error)?;

    let message = if result.changed {
        ROLE_ASSIGNED_MESSAGE
    } else {
        ROLE_ALREADY_HELD_MESSAGE
    };

    Ok(Json(AssignRoleResponseResource {
        message: message.to_string(),
        data: result.grant.into(),
    }))
}

#[utoipa::path(
    post,
    path = "/functions/v1/bulk-assign-role",
    tag = "access-control",
    request_body = BulkAssignRoleRequestResource,
    responses(
        (status = 200, description = "Per-user outcome; failures are listed in `errors`", body = BulkOperationResponseResource),
        (status = 400, description = "Empty user list or invalid role", body = ErrorResponseResource),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponseResource),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponseResource),
        (status = 503, description = "Identity provider unavailable", body = ErrorResponseResource)
    ),
    security(("bearerAuth" = []))
)]
pub async fn bulk_assign_role(
    State(state): State<AccessControlRestControllerState>,
    headers: HeaderMap,
    payload: Result<Json<BulkAssignRoleRequestResource>, JsonRejection>,
) -> Result<Json<BulkOperationResponseResource>, (StatusCode, Json<ErrorResponseResource>)> {
    let principal =
        authorize_admin_request(state.authorization_gate.as_ref(), &headers).await?;
    let request = validated_body(payload)?;

    let command = BulkAssignRoleCommand::new(
        principal.user_id().as_string(),
        request.user_ids,
        request.role,
    )
    .map_err(map_domain_error)?;

    let outcome = state
        .command_service
        .handle_bulk_assign_role(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(outcome.into()))
}

#[utoipa::path(
    get,
    path = "/admin/role-audit-logs",
    tag = "access-control",
    params(
        ("limit" = Option<i64>, Query, description = "Maximum entries, 1..=200, default 50"),
        ("userId" = Option<String>, Query, description = "Only entries about this user")
    ),
    responses(
        (status = 200, description = "Audit entries, newest first", body = [RoleAuditLogResource]),
        (status = 400, description = "Invalid query", body = ErrorResponseResource),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponseResource),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponseResource),
        (status = 500, description = "Storage failure", body = ErrorResponseResource)
    ),
    security(("bearerAuth" = []))
)]
pub async fn list_role_audit_logs(
    State(state): State<AccessControlRestControllerState>,
    headers: HeaderMap,
    query: Result<Query<ListRoleAuditLogsQueryResource>, QueryRejection>,
) -> Result<Json<Vec<RoleAuditLogResource>>, (StatusCode, Json<ErrorResponseResource>)> {
    authorize_admin_request(state.authorization_gate.as_ref(), &headers).await?;

    let Query(query) = query.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseResource::new(rejection.body_text())),
        )
    })?;

    let query =
        ListRoleAuditLogsQuery::new(query.user_id, query.limit).map_err(map_domain_error)?;
    let entries = state
        .query_service
        .handle_list_role_audit_logs(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(
        entries.into_iter().map(RoleAuditLogResource::from).collect(),
    ))
}

fn map_domain_error(error: AccessControlDomainError) -> (StatusCode, Json<ErrorResponseResource>) {
    match error {
        AccessControlDomainError::InvalidUserId
        | AccessControlDomainError::InvalidRole
        | AccessControlDomainError::EmptyUserIdList
        | AccessControlDomainError::InvalidUserIdFilter => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseResource::new(error.to_string())),
        ),
        AccessControlDomainError::InfrastructureError(details) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponseResource::with_details("Storage operation failed", details)),
        ),
    }
}
