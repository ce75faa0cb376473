use async_trait::async_trait;

use crate::access_control::domain::model::enums::access_control_domain_error::AccessControlDomainError;

#[async_trait]
pub trait AccessControlFacade: Send + Sync {
    /// Unknown role names are reported as not held.
    async fn has_role(&self, user_id: &str, role: &str) -> Result<bool, AccessControlDomainError>;
}
