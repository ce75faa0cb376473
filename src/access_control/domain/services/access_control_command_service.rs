use async_trait::async_trait;

use crate::{
    access_control::domain::model::{
        commands::{
            assign_role_command::AssignRoleCommand,
            bulk_assign_role_command::BulkAssignRoleCommand,
        },
        entities::role_grant::RoleGrant,
        enums::access_control_domain_error::AccessControlDomainError,
    },
    shared::domain::model::bulk_operation_outcome::BulkOperationOutcome,
};

#[derive(Clone, Debug)]
pub struct RoleAssignmentResult {
    pub grant: RoleGrant,
    /// `false` when the user already held exactly the requested role.
    pub changed: bool,
}

#[async_trait]
pub trait AccessControlCommandService: Send + Sync {
    async fn handle_assign_role(
        &self,
        command: AssignRoleCommand,
    ) -> Result<RoleAssignmentResult, AccessControlDomainError>;

    async fn handle_bulk_assign_role(
        &self,
        command: BulkAssignRoleCommand,
    ) -> Result<BulkOperationOutcome, AccessControlDomainError>;
}
