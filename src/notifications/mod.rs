use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tokio::task::JoinHandle;

use crate::{
    config::app_config::{AppConfig, SideEffectDelivery},
    iam_integration::interfaces::acl::admin_authorization_gate::AdminAuthorizationGate,
    notifications::{
        application::{
            command_services::notification_command_service_impl::NotificationCommandServiceImpl,
            query_services::notification_query_service_impl::NotificationQueryServiceImpl,
            side_effects::admin_notification_sink_impl::{
                DirectAdminNotificationSinkImpl, QueuedAdminNotificationSinkImpl,
            },
        },
        infrastructure::persistence::repositories::postgres::sqlx_admin_notification_repository_impl::SqlxAdminNotificationRepositoryImpl,
        interfaces::{
            acl::admin_notification_sink::AdminNotificationSink,
            rest::controllers::notifications_rest_controller::{
                NotificationsRestControllerState, router,
            },
        },
    },
    shared::application::best_effort_queue::BestEffortQueuePolicy,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

/// Must be called from within a tokio runtime when delivery is queued.
pub fn build_admin_notification_sink(
    config: &AppConfig,
    pool: PgPool,
) -> (Arc<dyn AdminNotificationSink>, Option<JoinHandle<()>>) {
    let repository = Arc::new(SqlxAdminNotificationRepositoryImpl::new(pool));

    match config.side_effect_delivery {
        SideEffectDelivery::Inline => (
            Arc::new(DirectAdminNotificationSinkImpl::new(repository)),
            None,
        ),
        SideEffectDelivery::Queued => {
            let (sink, worker) = QueuedAdminNotificationSinkImpl::spawn(
                repository,
                BestEffortQueuePolicy::from_config(config),
            );
            (Arc::new(sink), Some(worker))
        }
    }
}

pub fn build_notifications_router(
    pool: PgPool,
    authorization_gate: Arc<dyn AdminAuthorizationGate>,
) -> Router {
    let repository = Arc::new(SqlxAdminNotificationRepositoryImpl::new(pool));

    router(NotificationsRestControllerState {
        command_service: Arc::new(NotificationCommandServiceImpl::new(repository.clone())),
        query_service: Arc::new(NotificationQueryServiceImpl::new(repository)),
        authorization_gate,
    })
}
