use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::access_control::domain::model::{enums::app_role::AppRole, value_objects::user_id::UserId};

#[derive(Clone, Debug)]
pub struct RoleGrant {
    id: Uuid,
    user_id: UserId,
    role: AppRole,
    created_at: DateTime<Utc>,
}

impl RoleGrant {
    pub fn restore(id: Uuid, user_id: UserId, role: AppRole, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id,
            role,
            created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn role(&self) -> AppRole {
        self.role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
