use async_trait::async_trait;

use crate::{
    shared::domain::model::bulk_operation_outcome::BulkOperationOutcome,
    user_management::domain::model::{
        commands::bulk_delete_users_command::BulkDeleteUsersCommand,
        enums::user_management_domain_error::UserManagementDomainError,
    },
};

#[async_trait]
pub trait UserManagementCommandService: Send + Sync {
    async fn handle_bulk_delete_users(
        &self,
        command: BulkDeleteUsersCommand,
    ) -> Result<BulkOperationOutcome, UserManagementDomainError>;
}
