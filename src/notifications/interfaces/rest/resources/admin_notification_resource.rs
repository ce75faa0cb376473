use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::notifications::infrastructure::persistence::repositories::admin_notification_repository::AdminNotificationRecord;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AdminNotificationResource {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub notification_type: String,
    pub severity: String,
    pub user_id: Option<String>,
    #[schema(value_type = Object)]
    pub metadata: Value,
    pub read: bool,
    pub created_at: String,
}

impl From<AdminNotificationRecord> for AdminNotificationResource {
    fn from(record: AdminNotificationRecord) -> Self {
        Self {
            id: record.id.to_string(),
            title: record.title,
            message: record.message,
            notification_type: record.notification_type.as_str().to_string(),
            severity: record.severity.as_str().to_string(),
            user_id: record.user_id,
            metadata: record.metadata,
            read: record.read,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}
