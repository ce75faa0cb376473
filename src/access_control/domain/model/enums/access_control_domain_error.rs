use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessControlDomainError {
    #[error("userId is required")]
    InvalidUserId,

    #[error("Invalid role. Must be \"admin\" or \"client\"")]
    InvalidRole,

    #[error("userIds array is required and must not be empty")]
    EmptyUserIdList,

    #[error("userId filter must be a valid UUID")]
    InvalidUserIdFilter,

    #[error("storage error: {0}")]
    InfrastructureError(String),
}
