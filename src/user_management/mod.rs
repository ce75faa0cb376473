use std::sync::Arc;

use axum::Router;

use crate::{
    config::app_config::AppConfig,
    iam_integration::interfaces::acl::admin_authorization_gate::AdminAuthorizationGate,
    notifications::interfaces::acl::admin_notification_sink::AdminNotificationSink,
    user_management::{
        application::command_services::user_management_command_service_impl::UserManagementCommandServiceImpl,
        infrastructure::persistence::repositories::http::http_user_account_repository_impl::HttpUserAccountRepositoryImpl,
        interfaces::rest::controllers::user_management_rest_controller::{
            UserManagementRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_user_management_router(
    config: &AppConfig,
    authorization_gate: Arc<dyn AdminAuthorizationGate>,
    notification_sink: Arc<dyn AdminNotificationSink>,
) -> Result<Router, String> {
    let user_account_repository = Arc::new(HttpUserAccountRepositoryImpl::new(
        &config.auth_base_url,
        config.auth_service_role_key.clone(),
        config.iam_timeout(),
    )?);

    let command_service = Arc::new(UserManagementCommandServiceImpl::new(
        user_account_repository,
        notification_sink,
    ));

    Ok(router(UserManagementRestControllerState {
        command_service,
        authorization_gate,
    }))
}
