use uuid::Uuid;

use crate::notifications::domain::model::enums::notification_domain_error::NotificationDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NotificationId(Uuid);

impl NotificationId {
    pub fn new(value: &str) -> Result<Self, NotificationDomainError> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| NotificationDomainError::InvalidNotificationId)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}
