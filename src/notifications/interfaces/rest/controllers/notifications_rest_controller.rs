use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};

use crate::{
    iam_integration::interfaces::{
        acl::admin_authorization_gate::AdminAuthorizationGate,
        rest::admin_request_authorization::authorize_admin_request,
    },
    notifications::{
        domain::{
            model::{
                commands::mark_notification_read_command::MarkNotificationReadCommand,
                enums::notification_domain_error::NotificationDomainError,
                queries::list_admin_notifications_query::ListAdminNotificationsQuery,
            },
            services::{
                notification_command_service::NotificationCommandService,
                notification_query_service::NotificationQueryService,
            },
        },
        interfaces::rest::resources::{
            admin_notification_resource::AdminNotificationResource,
            list_admin_notifications_query_resource::ListAdminNotificationsQueryResource,
            mark_all_notifications_read_response_resource::MarkAllNotificationsReadResponseResource,
        },
    },
    shared::interfaces::rest::resources::error_response_resource::ErrorResponseResource,
};

#[derive(Clone)]
pub struct NotificationsRestControllerState {
    pub command_service: Arc<dyn NotificationCommandService>,
    pub query_service: Arc<dyn NotificationQueryService>,
    pub authorization_gate: Arc<dyn AdminAuthorizationGate>,
}

pub fn router(state: NotificationsRestControllerState) -> Router {
    Router::new()
        .route("/admin/notifications", get(list_admin_notifications))
        .route(
            "/admin/notifications/read-all",
            post(mark_all_notifications_read),
        )
        .route(
            "/admin/notifications/:notification_id/read",
            post(mark_notification_read),
        )
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/admin/notifications",
    tag = "notifications",
    params(
        ("limit" = Option<i64>, Query, description = "Maximum entries, 1..=200, default 50"),
        ("unreadOnly" = Option<bool>, Query, description = "Only unread notifications")
    ),
    responses(
        (status = 200, description = "Notifications, newest first", body = [AdminNotificationResource]),
        (status = 400, description = "Invalid query", body = ErrorResponseResource),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponseResource),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    ),
    security(("bearerAuth" = []))
)]
pub async fn list_admin_notifications(
    State(state): State<NotificationsRestControllerState>,
    headers: HeaderMap,
    query: Result<Query<ListAdminNotificationsQueryResource>, QueryRejection>,
) -> Result<Json<Vec<AdminNotificationResource>>, (StatusCode, Json<ErrorResponseResource>)> {
    authorize_admin_request(state.authorization_gate.as_ref(), &headers).await?;

    let Query(query) = query.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseResource::new(rejection.body_text())),
        )
    })?;

    let notifications = state
        .query_service
        .handle_list_notifications(ListAdminNotificationsQuery::new(
            query.limit,
            query.unread_only,
        ))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(
        notifications
            .into_iter()
            .map(AdminNotificationResource::from)
            .collect(),
    ))
}

#[utoipa::path(
    post,
    path = "/admin/notifications/{notification_id}/read",
    tag = "notifications",
    params(("notification_id" = String, Path, description = "Notification UUID")),
    responses(
        (status = 204, description = "Notification marked as read"),
        (status = 400, description = "Malformed notification id", body = ErrorResponseResource),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponseResource),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponseResource),
        (status = 404, description = "Notification not found", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    ),
    security(("bearerAuth" = []))
)]
pub async fn mark_notification_read(
    State(state): State<NotificationsRestControllerState>,
    headers: HeaderMap,
    Path(notification_id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponseResource>)> {
    authorize_admin_request(state.authorization_gate.as_ref(), &headers).await?;

    let command = MarkNotificationReadCommand::new(&notification_id).map_err(map_domain_error)?;

    state
        .command_service
        .handle_mark_read(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/admin/notifications/read-all",
    tag = "notifications",
    responses(
        (status = 200, description = "Unread notifications marked as read", body = MarkAllNotificationsReadResponseResource),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponseResource),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    ),
    security(("bearerAuth" = []))
)]
pub async fn mark_all_notifications_read(
    State(state): State<NotificationsRestControllerState>,
    headers: HeaderMap,
) -> Result<Json<MarkAllNotificationsReadResponseResource>, (StatusCode, Json<ErrorResponseResource>)>
{
    authorize_admin_request(state.authorization_gate.as_ref(), &headers).await?;

    let updated = state
        .command_service
        .handle_mark_all_read()
        .await
        .map_err(map_domain_error)?;

    Ok(Json(MarkAllNotificationsReadResponseResource { updated }))
}

fn map_domain_error(error: NotificationDomainError) -> (StatusCode, Json<ErrorResponseResource>) {
    let status = match error {
        NotificationDomainError::InvalidNotificationId => StatusCode::BAD_REQUEST,
        NotificationDomainError::NotificationNotFound => StatusCode::NOT_FOUND,
        NotificationDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(ErrorResponseResource::new(error.to_string())))
}
