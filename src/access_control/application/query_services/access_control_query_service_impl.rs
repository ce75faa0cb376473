use std::sync::Arc;

use async_trait::async_trait;

use crate::access_control::{
    domain::{
        model::{
            enums::access_control_domain_error::AccessControlDomainError,
            queries::list_role_audit_logs_query::ListRoleAuditLogsQuery,
        },
        services::access_control_query_service::AccessControlQueryService,
    },
    infrastructure::persistence::repositories::role_audit_log_repository::{
        RoleAuditLogRecord, RoleAuditLogRepository,
    },
};

pub struct AccessControlQueryServiceImpl {
    role_audit_log_repository: Arc<dyn RoleAuditLogRepository>,
}

impl AccessControlQueryServiceImpl {
    pub fn new(role_audit_log_repository: Arc<dyn RoleAuditLogRepository>) -> Self {
        Self {
            role_audit_log_repository,
        }
    }
}

#[async_trait]
impl AccessControlQueryService for AccessControlQueryServiceImpl {
    async fn handle_list_role_audit_logs(
        &self,
        query: ListRoleAuditLogsQuery,
    ) -> Result<Vec<RoleAuditLogRecord>, AccessControlDomainError> {
        self.role_audit_log_repository.list_recent(&query).await
    }
}
