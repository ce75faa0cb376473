use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::{
    notifications::{
        domain::model::entities::admin_notification::AdminNotification,
        infrastructure::persistence::repositories::admin_notification_repository::AdminNotificationRepository,
        interfaces::acl::admin_notification_sink::AdminNotificationSink,
    },
    shared::application::best_effort_queue::{BestEffortQueue, BestEffortQueuePolicy},
};

/// Writes the notification before returning; failures are logged and swallowed.
pub struct DirectAdminNotificationSinkImpl {
    repository: Arc<dyn AdminNotificationRepository>,
}

impl DirectAdminNotificationSinkImpl {
    pub fn new(repository: Arc<dyn AdminNotificationRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AdminNotificationSink for DirectAdminNotificationSinkImpl {
    async fn publish(&self, notification: AdminNotification) {
        if let Err(error) = self.repository.insert(&notification).await {
            warn!(title = notification.title(), error = %error, "admin notification not stored");
        }
    }
}

pub struct QueuedAdminNotificationSinkImpl {
    queue: BestEffortQueue<AdminNotification>,
}

impl QueuedAdminNotificationSinkImpl {
    pub fn spawn(
        repository: Arc<dyn AdminNotificationRepository>,
        policy: BestEffortQueuePolicy,
    ) -> (Self, JoinHandle<()>) {
        let (queue, worker) =
            BestEffortQueue::spawn("admin_notifications", policy, move |notification| {
                let repository = repository.clone();
                async move {
                    repository
                        .insert(&notification)
                        .await
                        .map_err(|e| e.to_string())
                }
            });

        (Self { queue }, worker)
    }
}

#[async_trait]
impl AdminNotificationSink for QueuedAdminNotificationSinkImpl {
    async fn publish(&self, notification: AdminNotification) {
        self.queue.enqueue(notification);
    }
}
