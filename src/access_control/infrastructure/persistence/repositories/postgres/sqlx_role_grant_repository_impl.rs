use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::access_control::{
    domain::model::{
        entities::role_grant::RoleGrant,
        enums::{access_control_domain_error::AccessControlDomainError, app_role::AppRole},
        value_objects::user_id::UserId,
    },
    infrastructure::persistence::repositories::role_grant_repository::RoleGrantRepository,
};

pub struct SqlxRoleGrantRepositoryImpl {
    pool: PgPool,
}

impl SqlxRoleGrantRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn restore_grant(
        (id, user_id, role, created_at): (Uuid, Uuid, String, DateTime<Utc>),
    ) -> Result<RoleGrant, AccessControlDomainError> {
        Ok(RoleGrant::restore(
            id,
            UserId::new(user_id.to_string())?,
            role.parse().map_err(|_| {
                AccessControlDomainError::InfrastructureError(format!(
                    "unknown role stored: {role}"
                ))
            })?,
            created_at,
        ))
    }
}

#[async_trait]
impl RoleGrantRepository for SqlxRoleGrantRepositoryImpl {
    async fn find_grants_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<RoleGrant>, AccessControlDomainError> {
        let statement = r#"
            SELECT id, user_id, role::text, created_at
            FROM user_roles
            WHERE user_id = $1::uuid
            ORDER BY created_at ASC
        "#;

        let rows = sqlx::query_as::<_, (Uuid, Uuid, String, DateTime<Utc>)>(statement)
            .bind(user_id.value())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AccessControlDomainError::InfrastructureError(e.to_string()))?;

        rows.into_iter().map(Self::restore_grant).collect()
    }

    async fn has_role(
        &self,
        user_id: &UserId,
        role: AppRole,
    ) -> Result<bool, AccessControlDomainError> {
        let statement = r#"
            SELECT EXISTS (
                SELECT 1
                FROM user_roles
                WHERE user_id = $1::uuid AND role = $2::app_role
            )
        "#;

        sqlx::query_scalar::<_, bool>(statement)
            .bind(user_id.value())
            .bind(role.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AccessControlDomainError::InfrastructureError(e.to_string()))
    }

    async fn delete_grants_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<u64, AccessControlDomainError> {
        let statement = r#"
            DELETE FROM user_roles
            WHERE user_id = $1::uuid
        "#;

        let result = sqlx::query(statement)
            .bind(user_id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| AccessControlDomainError::InfrastructureError(e.to_string()))?;

        Ok(result.rows_affected())
    }

    async fn insert_grant(
        &self,
        user_id: &UserId,
        role: AppRole,
    ) -> Result<RoleGrant, AccessControlDomainError> {
        let statement = r#"
            INSERT INTO user_roles (user_id, role)
            VALUES ($1::uuid, $2::app_role)
            RETURNING id, user_id, role::text, created_at
        "#;

        let row = sqlx::query_as::<_, (Uuid, Uuid, String, DateTime<Utc>)>(statement)
            .bind(user_id.value())
            .bind(role.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AccessControlDomainError::InfrastructureError(e.to_string()))?;

        Self::restore_grant(row)
    }
}
