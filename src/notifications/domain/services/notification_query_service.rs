use async_trait::async_trait;

use crate::notifications::{
    domain::model::{
        enums::notification_domain_error::NotificationDomainError,
        queries::list_admin_notifications_query::ListAdminNotificationsQuery,
    },
    infrastructure::persistence::repositories::admin_notification_repository::AdminNotificationRecord,
};

#[async_trait]
pub trait NotificationQueryService: Send + Sync {
    async fn handle_list_notifications(
        &self,
        query: ListAdminNotificationsQuery,
    ) -> Result<Vec<AdminNotificationRecord>, NotificationDomainError>;
}
