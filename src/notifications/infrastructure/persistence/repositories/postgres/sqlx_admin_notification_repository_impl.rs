use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{PgPool, types::Json};
use uuid::Uuid;

use crate::notifications::{
    domain::model::{
        entities::admin_notification::AdminNotification,
        enums::notification_domain_error::NotificationDomainError,
        queries::list_admin_notifications_query::ListAdminNotificationsQuery,
        value_objects::notification_id::NotificationId,
    },
    infrastructure::persistence::repositories::admin_notification_repository::{
        AdminNotificationRecord, AdminNotificationRepository,
    },
};

type NotificationRow = (
    Uuid,
    String,
    String,
    String,
    String,
    Option<Uuid>,
    Option<Json<Value>>,
    bool,
    DateTime<Utc>,
);

pub struct SqlxAdminNotificationRepositoryImpl {
    pool: PgPool,
}

impl SqlxAdminNotificationRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn infrastructure_error(error: sqlx::Error) -> NotificationDomainError {
    NotificationDomainError::InfrastructureError(error.to_string())
}

#[async_trait]
impl AdminNotificationRepository for SqlxAdminNotificationRepositoryImpl {
    async fn insert(&self, notification: &AdminNotification) -> Result<(), NotificationDomainError> {
        let statement = r#"
            INSERT INTO admin_notifications
                (title, message, type, severity, metadata, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
        "#;

        sqlx::query(statement)
            .bind(notification.title())
            .bind(notification.message())
            .bind(notification.notification_type().as_str())
            .bind(notification.severity().as_str())
            .bind(Json(notification.metadata().clone()))
            .bind(notification.created_at())
            .execute(&self.pool)
            .await
            .map_err(infrastructure_error)?;

        Ok(())
    }

    async fn list_recent(
        &self,
        query: &ListAdminNotificationsQuery,
    ) -> Result<Vec<AdminNotificationRecord>, NotificationDomainError> {
        let statement = r#"
            SELECT id, title, message, type, severity, user_id, metadata, read, created_at
            FROM admin_notifications
            WHERE ($1 = FALSE OR read = FALSE)
            ORDER BY created_at DESC
            LIMIT $2
        "#;

        let rows = sqlx::query_as::<_, NotificationRow>(statement)
            .bind(query.unread_only())
            .bind(query.limit())
            .fetch_all(&self.pool)
            .await
            .map_err(infrastructure_error)?;

        rows.into_iter()
            .map(
                |(id, title, message, notification_type, severity, user_id, metadata, read, created_at)| {
                    Ok(AdminNotificationRecord {
                        id,
                        title,
                        message,
                        notification_type: notification_type.parse()?,
                        severity: severity.parse()?,
                        user_id: user_id.map(|value| value.to_string()),
                        metadata: metadata.map(|Json(value)| value).unwrap_or(Value::Null),
                        read,
                        created_at,
                    })
                },
            )
            .collect()
    }

    async fn mark_read(&self, id: NotificationId) -> Result<bool, NotificationDomainError> {
        let statement = r#"
            UPDATE admin_notifications
            SET read = TRUE
            WHERE id = $1
        "#;

        let result = sqlx::query(statement)
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(infrastructure_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn mark_all_read(&self) -> Result<u64, NotificationDomainError> {
        let statement = r#"
            UPDATE admin_notifications
            SET read = TRUE
            WHERE read = FALSE
        "#;

        let result = sqlx::query(statement)
            .execute(&self.pool)
            .await
            .map_err(infrastructure_error)?;

        Ok(result.rows_affected())
    }
}
