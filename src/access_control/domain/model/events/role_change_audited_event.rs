use chrono::{DateTime, Utc};

use crate::access_control::domain::model::{
    enums::{app_role::AppRole, role_audit_action::RoleAuditAction},
    value_objects::user_id::UserId,
};

/// Immutable audit record of a role mutation. Written once, never updated.
#[derive(Clone, Debug)]
pub struct RoleChangeAuditedEvent {
    pub user_id: UserId,
    pub role: AppRole,
    pub changed_by: UserId,
    pub action: RoleAuditAction,
    pub created_at: DateTime<Utc>,
}

impl RoleChangeAuditedEvent {
    pub fn assigned(
        user_id: UserId,
        role: AppRole,
        changed_by: UserId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            role,
            changed_by,
            action: RoleAuditAction::Assigned,
            created_at,
        }
    }
}
