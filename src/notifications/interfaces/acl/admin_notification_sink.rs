use async_trait::async_trait;

use crate::notifications::domain::model::entities::admin_notification::AdminNotification;

/// Entry point other contexts use to raise dashboard notifications.
/// Publishing never fails from the caller's point of view.
#[async_trait]
pub trait AdminNotificationSink: Send + Sync {
    async fn publish(&self, notification: AdminNotification);
}
