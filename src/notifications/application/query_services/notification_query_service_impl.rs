use std::sync::Arc;

use async_trait::async_trait;

use crate::notifications::{
    domain::{
        model::{
            enums::notification_domain_error::NotificationDomainError,
            queries::list_admin_notifications_query::ListAdminNotificationsQuery,
        },
        services::notification_query_service::NotificationQueryService,
    },
    infrastructure::persistence::repositories::admin_notification_repository::{
        AdminNotificationRecord, AdminNotificationRepository,
    },
};

pub struct NotificationQueryServiceImpl {
    repository: Arc<dyn AdminNotificationRepository>,
}

impl NotificationQueryServiceImpl {
    pub fn new(repository: Arc<dyn AdminNotificationRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl NotificationQueryService for NotificationQueryServiceImpl {
    async fn handle_list_notifications(
        &self,
        query: ListAdminNotificationsQuery,
    ) -> Result<Vec<AdminNotificationRecord>, NotificationDomainError> {
        self.repository.list_recent(&query).await
    }
}
