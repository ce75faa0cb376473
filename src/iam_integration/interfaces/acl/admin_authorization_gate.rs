use async_trait::async_trait;
use thiserror::Error;

use crate::iam_integration::domain::model::entities::authenticated_principal::AuthenticatedPrincipal;

#[derive(Debug, Error)]
pub enum AdminAuthorizationError {
    #[error("Authorization required")]
    MissingAuthentication,

    #[error("Invalid authorization: {0}")]
    InvalidAuthentication(String),

    #[error("Forbidden: Admin access required")]
    AccessDenied,

    #[error("Identity provider unavailable: {0}")]
    IamUnavailable(String),

    #[error("Error checking permissions: {0}")]
    PrivilegeCheckFailed(String),
}

/// Resolves the caller behind an `Authorization` header and requires the admin
/// privilege. Read-only: it never mutates anything, and every mutating handler
/// runs it to completion first.
#[async_trait]
pub trait AdminAuthorizationGate: Send + Sync {
    async fn authorize_admin(
        &self,
        authorization_header: Option<&str>,
    ) -> Result<AuthenticatedPrincipal, AdminAuthorizationError>;
}
