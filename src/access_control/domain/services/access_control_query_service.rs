use async_trait::async_trait;

use crate::access_control::{
    domain::model::{
        enums::access_control_domain_error::AccessControlDomainError,
        queries::list_role_audit_logs_query::ListRoleAuditLogsQuery,
    },
    infrastructure::persistence::repositories::role_audit_log_repository::RoleAuditLogRecord,
};

#[async_trait]
pub trait AccessControlQueryService: Send + Sync {
    async fn handle_list_role_audit_logs(
        &self,
        query: ListRoleAuditLogsQuery,
    ) -> Result<Vec<RoleAuditLogRecord>, AccessControlDomainError>;
}
