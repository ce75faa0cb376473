use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::iam_integration::{
    domain::model::entities::authenticated_principal::AuthenticatedPrincipal,
    interfaces::acl::{
        admin_authorization_gate::{AdminAuthorizationError, AdminAuthorizationGate},
        iam_authentication_facade::{IamAuthenticationFacade, IamIntegrationError},
        privilege_check_facade::{ADMIN_PRIVILEGE, PrivilegeCheckFacade},
    },
};

pub struct AdminAuthorizationGateImpl {
    iam_authentication_facade: Arc<dyn IamAuthenticationFacade>,
    privilege_check_facade: Arc<dyn PrivilegeCheckFacade>,
}

impl AdminAuthorizationGateImpl {
    pub fn new(
        iam_authentication_facade: Arc<dyn IamAuthenticationFacade>,
        privilege_check_facade: Arc<dyn PrivilegeCheckFacade>,
    ) -> Self {
        Self {
            iam_authentication_facade,
            privilege_check_facade,
        }
    }

    fn bearer_token(authorization_header: Option<&str>) -> Result<&str, AdminAuthorizationError> {
        let authorization = authorization_header
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(AdminAuthorizationError::MissingAuthentication)?;

        authorization
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                AdminAuthorizationError::InvalidAuthentication(
                    "expected a Bearer token".to_string(),
                )
            })
    }
}

#[async_trait]
impl AdminAuthorizationGate for AdminAuthorizationGateImpl {
    async fn authorize_admin(
        &self,
        authorization_header: Option<&str>,
    ) -> Result<AuthenticatedPrincipal, AdminAuthorizationError> {
        let token = Self::bearer_token(authorization_header).inspect_err(|error| {
            warn!(%error, "rejected request without usable credentials");
        })?;

        let verified = self
            .iam_authentication_facade
            .verify_access_token(token)
            .await
            .map_err(|error| match error {
                IamIntegrationError::InvalidToken(message) => {
                    warn!(reason = %message, "access token rejected");
                    AdminAuthorizationError::InvalidAuthentication(message)
                }
                IamIntegrationError::Unavailable(message) => {
                    warn!(reason = %message, "identity provider unavailable");
                    AdminAuthorizationError::IamUnavailable(message)
                }
            })?;

        let is_admin = self
            .privilege_check_facade
            .has_privilege(&verified.subject_id, ADMIN_PRIVILEGE)
            .await
            .map_err(AdminAuthorizationError::PrivilegeCheckFailed)?;

        if !is_admin {
            warn!(user_id = verified.subject_id.value(), "caller is not an admin");
            return Err(AdminAuthorizationError::AccessDenied);
        }

        debug!(user_id = verified.subject_id.value(), "admin caller authorized");

        Ok(AuthenticatedPrincipal::new(verified.subject_id, verified.email))
    }
}
