use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tokio::task::JoinHandle;

use crate::{
    access_control::{
        application::{
            acl::access_control_facade_impl::AccessControlFacadeImpl,
            command_services::access_control_command_service_impl::AccessControlCommandServiceImpl,
            query_services::access_control_query_service_impl::AccessControlQueryServiceImpl,
            side_effects::role_audit_sink_impl::{DirectRoleAuditSinkImpl, QueuedRoleAuditSinkImpl},
        },
        domain::services::role_audit_sink::RoleAuditSink,
        infrastructure::persistence::repositories::postgres::{
            sqlx_role_audit_log_repository_impl::SqlxRoleAuditLogRepositoryImpl,
            sqlx_role_grant_repository_impl::SqlxRoleGrantRepositoryImpl,
        },
        interfaces::{
            acl::access_control_facade::AccessControlFacade,
            rest::controllers::access_control_rest_controller::{
                AccessControlRestControllerState, router,
            },
        },
    },
    config::app_config::{AppConfig, SideEffectDelivery},
    iam_integration::interfaces::acl::admin_authorization_gate::AdminAuthorizationGate,
    notifications::interfaces::acl::admin_notification_sink::AdminNotificationSink,
    shared::application::best_effort_queue::BestEffortQueuePolicy,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_access_control_facade(pool: PgPool) -> Arc<dyn AccessControlFacade> {
    Arc::new(AccessControlFacadeImpl::new(Arc::new(
        SqlxRoleGrantRepositoryImpl::new(pool),
    )))
}

/// Must be called from within a tokio runtime when delivery is queued.
pub fn build_role_audit_sink(
    config: &AppConfig,
    pool: PgPool,
) -> (Arc<dyn RoleAuditSink>, Option<JoinHandle<()>>) {
    let repository = Arc::new(SqlxRoleAuditLogRepositoryImpl::new(pool));

    match config.side_effect_delivery {
        SideEffectDelivery::Inline => (Arc::new(DirectRoleAuditSinkImpl::new(repository)), None),
        SideEffectDelivery::Queued => {
            let (sink, worker) = QueuedRoleAuditSinkImpl::spawn(
                repository,
                BestEffortQueuePolicy::from_config(config),
            );
            (Arc::new(sink), Some(worker))
        }
    }
}

pub fn build_access_control_router(
    pool: PgPool,
    authorization_gate: Arc<dyn AdminAuthorizationGate>,
    audit_sink: Arc<dyn RoleAuditSink>,
    notification_sink: Arc<dyn AdminNotificationSink>,
) -> Router {
    let role_grant_repository = Arc::new(SqlxRoleGrantRepositoryImpl::new(pool.clone()));
    let role_audit_log_repository = Arc::new(SqlxRoleAuditLogRepositoryImpl::new(pool));

    let command_service = Arc::new(AccessControlCommandServiceImpl::new(
        role_grant_repository,
        audit_sink,
        notification_sink,
    ));
    let query_service = Arc::new(AccessControlQueryServiceImpl::new(
        role_audit_log_repository,
    ));

    router(AccessControlRestControllerState {
        command_service,
        query_service,
        authorization_gate,
    })
}
