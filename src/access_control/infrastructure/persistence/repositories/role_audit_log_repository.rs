use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::access_control::domain::model::{
    enums::{
        access_control_domain_error::AccessControlDomainError, app_role::AppRole,
        role_audit_action::RoleAuditAction,
    },
    events::role_change_audited_event::RoleChangeAuditedEvent,
    queries::list_role_audit_logs_query::ListRoleAuditLogsQuery,
};

#[derive(Clone, Debug)]
pub struct RoleAuditLogRecord {
    pub id: Uuid,
    pub user_id: String,
    pub role: AppRole,
    pub changed_by: String,
    pub action: RoleAuditAction,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait RoleAuditLogRepository: Send + Sync {
    async fn append(&self, event: &RoleChangeAuditedEvent) -> Result<(), AccessControlDomainError>;

    async fn list_recent(
        &self,
        query: &ListRoleAuditLogsQuery,
    ) -> Result<Vec<RoleAuditLogRecord>, AccessControlDomainError>;
}
