use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::{
    notifications::{
        domain::model::entities::admin_notification::AdminNotification,
        interfaces::acl::admin_notification_sink::AdminNotificationSink,
    },
    shared::domain::model::bulk_operation_outcome::BulkOperationOutcome,
    user_management::{
        domain::{
            model::{
                commands::bulk_delete_users_command::BulkDeleteUsersCommand,
                enums::user_management_domain_error::UserManagementDomainError,
            },
            services::user_management_command_service::UserManagementCommandService,
        },
        infrastructure::persistence::repositories::user_account_repository::UserAccountRepository,
    },
};

pub struct UserManagementCommandServiceImpl {
    user_account_repository: Arc<dyn UserAccountRepository>,
    notification_sink: Arc<dyn AdminNotificationSink>,
}

impl UserManagementCommandServiceImpl {
    pub fn new(
        user_account_repository: Arc<dyn UserAccountRepository>,
        notification_sink: Arc<dyn AdminNotificationSink>,
    ) -> Self {
        Self {
            user_account_repository,
            notification_sink,
        }
    }
}

#[async_trait]
impl UserManagementCommandService for UserManagementCommandServiceImpl {
    async fn handle_bulk_delete_users(
        &self,
        command: BulkDeleteUsersCommand,
    ) -> Result<BulkOperationOutcome, UserManagementDomainError> {
        let mut outcome = BulkOperationOutcome::new();

        for user_id in command.user_ids() {
            match self.user_account_repository.delete_account(user_id).await {
                Ok(()) => {
                    info!(
                        user_id = user_id.value(),
                        deleted_by = command.requested_by().value(),
                        "user account deleted"
                    );
                    outcome.record_success();
                }
                Err(error) => {
                    warn!(user_id = user_id.value(), error = %error, "user account deletion failed");
                    outcome.record_failure(user_id.value(), error.to_string());
                }
            }
        }

        info!(
            success_count = outcome.success_count(),
            failure_count = outcome.failure_count(),
            total = outcome.total(),
            partial_failure = outcome.is_partial_failure(),
            deleted_by = command.requested_by().value(),
            "bulk user deletion completed"
        );

        self.notification_sink
            .publish(AdminNotification::bulk_user_deletion(
                outcome.success_count(),
                command.requested_by().value(),
                command.requested_by_email(),
            ))
            .await;

        Ok(outcome)
    }
}
