use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotificationDomainError {
    #[error("notification id must be a valid UUID")]
    InvalidNotificationId,

    #[error("notification not found")]
    NotificationNotFound,

    #[error("storage error: {0}")]
    InfrastructureError(String),
}
