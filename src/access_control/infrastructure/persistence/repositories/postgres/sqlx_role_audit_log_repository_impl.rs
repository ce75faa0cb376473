use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::access_control::{
    domain::model::{
        enums::access_control_domain_error::AccessControlDomainError,
        events::role_change_audited_event::RoleChangeAuditedEvent,
        queries::list_role_audit_logs_query::ListRoleAuditLogsQuery,
    },
    infrastructure::persistence::repositories::role_audit_log_repository::{
        RoleAuditLogRecord, RoleAuditLogRepository,
    },
};

pub struct SqlxRoleAuditLogRepositoryImpl {
    pool: PgPool,
}

impl SqlxRoleAuditLogRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleAuditLogRepository for SqlxRoleAuditLogRepositoryImpl {
    async fn append(&self, event: &RoleChangeAuditedEvent) -> Result<(), AccessControlDomainError> {
        let statement = r#"
            INSERT INTO role_audit_logs (user_id, role, changed_by, action, created_at)
            VALUES ($1::uuid, $2::app_role, $3::uuid, $4, $5)
        "#;

        sqlx::query(statement)
            .bind(event.user_id.value())
            .bind(event.role.as_str())
            .bind(event.changed_by.value())
            .bind(event.action.as_str())
            .bind(event.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| AccessControlDomainError::InfrastructureError(e.to_string()))?;

        Ok(())
    }

    async fn list_recent(
        &self,
        query: &ListRoleAuditLogsQuery,
    ) -> Result<Vec<RoleAuditLogRecord>, AccessControlDomainError> {
        let statement = r#"
            SELECT id, user_id, role::text, changed_by, action, created_at
            FROM role_audit_logs
            WHERE ($1::uuid IS NULL OR user_id = $1::uuid)
            ORDER BY created_at DESC
            LIMIT $2
        "#;

        let rows = sqlx::query_as::<_, (Uuid, Uuid, String, Uuid, String, DateTime<Utc>)>(
            statement,
        )
        .bind(query.user_id().map(|user_id| user_id.value()))
        .bind(query.limit())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AccessControlDomainError::InfrastructureError(e.to_string()))?;

        rows.into_iter()
            .map(|(id, user_id, role, changed_by, action, created_at)| {
                Ok(RoleAuditLogRecord {
                    id,
                    user_id: user_id.to_string(),
                    role: role.parse().map_err(|_| {
                        AccessControlDomainError::InfrastructureError(format!(
                            "unknown role stored: {role}"
                        ))
                    })?,
                    changed_by: changed_by.to_string(),
                    action: action.parse()?,
                    created_at,
                })
            })
            .collect()
    }
}
