use std::str::FromStr;

use crate::notifications::domain::model::enums::notification_domain_error::NotificationDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NotificationType {
    BulkAction,
    System,
    Security,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BulkAction => "bulk_action",
            Self::System => "system",
            Self::Security => "security",
        }
    }
}

impl FromStr for NotificationType {
    type Err = NotificationDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "bulk_action" => Ok(Self::BulkAction),
            "system" => Ok(Self::System),
            "security" => Ok(Self::Security),
            other => Err(NotificationDomainError::InfrastructureError(format!(
                "unknown notification type: {other}"
            ))),
        }
    }
}
