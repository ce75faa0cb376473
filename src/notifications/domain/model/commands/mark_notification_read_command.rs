use crate::notifications::domain::model::{
    enums::notification_domain_error::NotificationDomainError,
    value_objects::notification_id::NotificationId,
};

#[derive(Clone, Debug)]
pub struct MarkNotificationReadCommand {
    notification_id: NotificationId,
}

impl MarkNotificationReadCommand {
    pub fn new(notification_id: &str) -> Result<Self, NotificationDomainError> {
        Ok(Self {
            notification_id: NotificationId::new(notification_id)?,
        })
    }

    pub fn notification_id(&self) -> NotificationId {
        self.notification_id
    }
}
