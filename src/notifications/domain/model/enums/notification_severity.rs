use std::str::FromStr;

use crate::notifications::domain::model::enums::notification_domain_error::NotificationDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NotificationSeverity {
    Info,
    Warning,
    Critical,
}

impl NotificationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl FromStr for NotificationSeverity {
    type Err = NotificationDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "critical" => Ok(Self::Critical),
            other => Err(NotificationDomainError::InfrastructureError(format!(
                "unknown notification severity: {other}"
            ))),
        }
    }
}
