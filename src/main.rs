use axum::Router;
use dotenvy::dotenv;
use highlight_admin_api::{
    access_control::{
        build_access_control_facade, build_access_control_router, build_role_audit_sink,
        interfaces::rest::resources::{
            assign_role_request_resource::AssignRoleRequestResource,
            assign_role_response_resource::{AssignRoleResponseResource, RoleGrantResource},
            bulk_assign_role_request_resource::BulkAssignRoleRequestResource,
            role_audit_log_resource::{ListRoleAuditLogsQueryResource, RoleAuditLogResource},
        },
    },
    config::app_config::AppConfig,
    iam_integration::build_admin_authorization_gate,
    notifications::{
        build_admin_notification_sink, build_notifications_router,
        interfaces::rest::resources::{
            admin_notification_resource::AdminNotificationResource,
            list_admin_notifications_query_resource::ListAdminNotificationsQueryResource,
            mark_all_notifications_read_response_resource::MarkAllNotificationsReadResponseResource,
        },
    },
    shared::{
        application::best_effort_queue::drain_side_effect_workers,
        interfaces::rest::{
            cors::build_cors_layer,
            openapi::security::BearerSecurityAddon,
            resources::{
                bulk_operation_response_resource::{
                    BulkItemErrorResource, BulkOperationResponseResource,
                },
                error_response_resource::ErrorResponseResource,
            },
        },
        observability::init_tracing,
    },
    user_management::{
        build_user_management_router,
        interfaces::rest::resources::bulk_delete_users_request_resource::BulkDeleteUsersRequestResource,
    },
};
use sqlx::postgres::PgPoolOptions;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        highlight_admin_api::access_control::interfaces::rest::controllers::access_control_rest_controller::assign_role,
        highlight_admin_api::access_control::interfaces::rest::controllers::access_control_rest_controller::bulk_assign_role,
        highlight_admin_api::access_control::interfaces::rest::controllers::access_control_rest_controller::list_role_audit_logs,
        highlight_admin_api::user_management::interfaces::rest::controllers::user_management_rest_controller::bulk_delete_users,
        highlight_admin_api::notifications::interfaces::rest::controllers::notifications_rest_controller::list_admin_notifications,
        highlight_admin_api::notifications::interfaces::rest::controllers::notifications_rest_controller::mark_notification_read,
        highlight_admin_api::notifications::interfaces::rest::controllers::notifications_rest_controller::mark_all_notifications_read
    ),
    components(
        schemas(
            AssignRoleRequestResource,
            AssignRoleResponseResource,
            RoleGrantResource,
            BulkAssignRoleRequestResource,
            RoleAuditLogResource,
            ListRoleAuditLogsQueryResource,
            BulkDeleteUsersRequestResource,
            AdminNotificationResource,
            ListAdminNotificationsQueryResource,
            MarkAllNotificationsReadResponseResource,
            BulkOperationResponseResource,
            BulkItemErrorResource,
            ErrorResponseResource
        )
    ),
    tags(
        (name = "access-control", description = "Role assignment and role audit trail"),
        (name = "user-management", description = "Bulk account deletion"),
        (name = "notifications", description = "Administrator dashboard notifications")
    ),
    modifiers(&BearerSecurityAddon)
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(config.postgres_max_connections)
        .connect(&config.database_url())
        .await
        .map_err(|e| format!("failed to connect to postgres: {e}"))?;

    if config.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| format!("failed to run migrations: {e}"))?;
        info!("database migrations applied");
    }

    let access_control_facade = build_access_control_facade(pool.clone());
    let authorization_gate = build_admin_authorization_gate(&config, access_control_facade)?;
    let (notification_sink, notification_worker) =
        build_admin_notification_sink(&config, pool.clone());
    let (audit_sink, audit_worker) = build_role_audit_sink(&config, pool.clone());
    let side_effect_workers: Vec<_> = [
        ("admin_notifications", notification_worker),
        ("role_audit_logs", audit_worker),
    ]
    .into_iter()
    .filter_map(|(channel, worker)| worker.map(|worker| (channel, worker)))
    .collect();

    let access_control_router = build_access_control_router(
        pool.clone(),
        authorization_gate.clone(),
        audit_sink,
        notification_sink.clone(),
    );
    let user_management_router = build_user_management_router(
        &config,
        authorization_gate.clone(),
        notification_sink,
    )?;
    let notifications_router = build_notifications_router(pool, authorization_gate);

    let app = Router::new()
        .merge(access_control_router)
        .merge(user_management_router)
        .merge(notifications_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(build_cors_layer())
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("failed to bind {addr}: {e}"))?;

    info!(port = config.port, "admin API listening");
    info!(
        "Swagger UI available at http://localhost:{}/swagger-ui",
        config.port
    );

    // The router owns every sink handle; once serve returns they are dropped
    // and the queue workers see their channels close.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("server error: {e}"))?;

    let unflushed =
        drain_side_effect_workers(side_effect_workers, config.shutdown_drain_timeout()).await;
    if unflushed > 0 {
        warn!(unflushed, "shutdown finished with undelivered side-channel entries");
    }
    info!("admin API stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            warn!(%error, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                warn!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received, draining side-channel queues");
}
