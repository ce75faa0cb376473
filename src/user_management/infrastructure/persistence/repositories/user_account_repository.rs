use async_trait::async_trait;

use crate::user_management::domain::model::{
    enums::user_management_domain_error::UserManagementDomainError,
    value_objects::user_account_id::UserAccountId,
};

/// Privileged account store. Deleting an account cascades to its role grants
/// and profile in the backing database.
#[async_trait]
pub trait UserAccountRepository: Send + Sync {
    async fn delete_account(&self, user_id: &UserAccountId) -> Result<(), UserManagementDomainError>;
}
