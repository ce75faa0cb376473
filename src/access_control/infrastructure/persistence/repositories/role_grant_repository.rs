use async_trait::async_trait;

use crate::access_control::domain::model::{
    entities::role_grant::RoleGrant,
    enums::{access_control_domain_error::AccessControlDomainError, app_role::AppRole},
    value_objects::user_id::UserId,
};

#[async_trait]
pub trait RoleGrantRepository: Send + Sync {
    async fn find_grants_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<RoleGrant>, AccessControlDomainError>;

    async fn has_role(&self, user_id: &UserId, role: AppRole)
    -> Result<bool, AccessControlDomainError>;

    /// Returns the number of grants removed.
    async fn delete_grants_for_user(&self, user_id: &UserId)
    -> Result<u64, AccessControlDomainError>;

    async fn insert_grant(
        &self,
        user_id: &UserId,
        role: AppRole,
    ) -> Result<RoleGrant, AccessControlDomainError>;
}
