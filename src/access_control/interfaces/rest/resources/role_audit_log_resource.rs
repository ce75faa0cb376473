use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::access_control::infrastructure::persistence::repositories::role_audit_log_repository::RoleAuditLogRecord;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RoleAuditLogResource {
    pub id: String,
    pub user_id: String,
    pub role: String,
    pub changed_by: String,
    pub action: String,
    pub created_at: String,
}

impl From<RoleAuditLogRecord> for RoleAuditLogResource {
    fn from(record: RoleAuditLogRecord) -> Self {
        Self {
            id: record.id.to_string(),
            user_id: record.user_id,
            role: record.role.as_str().to_string(),
            changed_by: record.changed_by,
            action: record.action.as_str().to_string(),
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListRoleAuditLogsQueryResource {
    pub limit: Option<i64>,
    pub user_id: Option<String>,
}
