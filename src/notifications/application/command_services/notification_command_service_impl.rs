use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::notifications::{
    domain::{
        model::{
            commands::mark_notification_read_command::MarkNotificationReadCommand,
            enums::notification_domain_error::NotificationDomainError,
        },
        services::notification_command_service::NotificationCommandService,
    },
    infrastructure::persistence::repositories::admin_notification_repository::AdminNotificationRepository,
};

pub struct NotificationCommandServiceImpl {
    repository: Arc<dyn AdminNotificationRepository>,
}

impl NotificationCommandServiceImpl {
    pub fn new(repository: Arc<dyn AdminNotificationRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl NotificationCommandService for NotificationCommandServiceImpl {
    async fn handle_mark_read(
        &self,
        command: MarkNotificationReadCommand,
    ) -> Result<(), NotificationDomainError> {
        let found = self
            .repository
            .mark_read(command.notification_id())
            .await?;

        if !found {
            return Err(NotificationDomainError::NotificationNotFound);
        }

        Ok(())
    }

    async fn handle_mark_all_read(&self) -> Result<u64, NotificationDomainError> {
        let updated = self.repository.mark_all_read().await?;
        info!(updated, "notifications marked as read");
        Ok(updated)
    }
}
