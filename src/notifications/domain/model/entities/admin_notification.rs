use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use crate::notifications::domain::model::enums::{
    notification_severity::NotificationSeverity, notification_type::NotificationType,
};

/// Dashboard entry for administrators, raised once per completed bulk action.
#[derive(Clone, Debug)]
pub struct AdminNotification {
    title: String,
    message: String,
    notification_type: NotificationType,
    severity: NotificationSeverity,
    metadata: Value,
    created_at: DateTime<Utc>,
}

impl AdminNotification {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        notification_type: NotificationType,
        severity: NotificationSeverity,
        metadata: Value,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            notification_type,
            severity,
            metadata,
            created_at: Utc::now(),
        }
    }

    pub fn bulk_user_deletion(
        deleted_count: usize,
        deleted_by: &str,
        deleted_by_email: Option<&str>,
    ) -> Self {
        Self::new(
            "Bulk User Deletion Completed",
            format!("Successfully deleted {deleted_count} users"),
            NotificationType::BulkAction,
            NotificationSeverity::Warning,
            json!({
                "user_count": deleted_count,
                "deleted_by": deleted_by,
                "deleted_by_email": deleted_by_email,
            }),
        )
    }

    pub fn bulk_role_assignment(
        role: &str,
        assigned_count: usize,
        failure_count: usize,
        assigned_by: &str,
    ) -> Self {
        Self::new(
            "Bulk Role Assignment Completed",
            format!("Assigned role {role} to {assigned_count} users"),
            NotificationType::BulkAction,
            NotificationSeverity::Info,
            json!({
                "user_count": assigned_count,
                "failure_count": failure_count,
                "role": role,
                "assigned_by": assigned_by,
            }),
        )
    }

    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn message(&self) -> &str {
        &self.message
    }
    pub fn notification_type(&self) -> NotificationType {
        self.notification_type
    }
    pub fn severity(&self) -> NotificationSeverity {
        self.severity
    }
    pub fn metadata(&self) -> &Value {
        &self.metadata
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
