use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::notifications::domain::model::{
    entities::admin_notification::AdminNotification,
    enums::{
        notification_domain_error::NotificationDomainError,
        notification_severity::NotificationSeverity, notification_type::NotificationType,
    },
    queries::list_admin_notifications_query::ListAdminNotificationsQuery,
    value_objects::notification_id::NotificationId,
};

#[derive(Clone, Debug)]
pub struct AdminNotificationRecord {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub severity: NotificationSeverity,
    pub user_id: Option<String>,
    pub metadata: Value,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait AdminNotificationRepository: Send + Sync {
    async fn insert(&self, notification: &AdminNotification) -> Result<(), NotificationDomainError>;

    async fn list_recent(
        &self,
        query: &ListAdminNotificationsQuery,
    ) -> Result<Vec<AdminNotificationRecord>, NotificationDomainError>;

    /// `false` when no notification has the given id.
    async fn mark_read(&self, id: NotificationId) -> Result<bool, NotificationDomainError>;

    async fn mark_all_read(&self) -> Result<u64, NotificationDomainError>;
}
