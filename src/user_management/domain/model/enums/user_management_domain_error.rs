use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserManagementDomainError {
    #[error("user ids must be non-empty strings")]
    InvalidUserId,

    #[error("userIds array is required and must not be empty")]
    EmptyUserIdList,

    #[error("Cannot delete your own account")]
    SelfDeletionForbidden,

    #[error("user not found")]
    UserNotFound,

    #[error("account service error: {0}")]
    InfrastructureError(String),
}
