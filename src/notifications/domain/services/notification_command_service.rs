use async_trait::async_trait;

use crate::notifications::domain::model::{
    commands::mark_notification_read_command::MarkNotificationReadCommand,
    enums::notification_domain_error::NotificationDomainError,
};

#[async_trait]
pub trait NotificationCommandService: Send + Sync {
    async fn handle_mark_read(
        &self,
        command: MarkNotificationReadCommand,
    ) -> Result<(), NotificationDomainError>;

    /// Returns how many notifications flipped from unread to read.
    async fn handle_mark_all_read(&self) -> Result<u64, NotificationDomainError>;
}
