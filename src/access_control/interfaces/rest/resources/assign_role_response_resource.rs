use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::access_control::domain::model::entities::role_grant::RoleGrant;

pub const ROLE_ASSIGNED_MESSAGE: &str = "Role assigned successfully";
pub const ROLE_ALREADY_HELD_MESSAGE: &str = "User already has this role";

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RoleGrantResource {
    pub id: String,
    pub user_id: String,
    pub role: String,
    pub created_at: String,
}

impl From<RoleGrant> for RoleGrantResource {
    fn from(grant: RoleGrant) -> Self {
        Self {
            id: grant.id().to_string(),
            user_id: grant.user_id().value().to_string(),
            role: grant.role().as_str().to_string(),
            created_at: grant.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AssignRoleResponseResource {
    pub message: String,
    pub data: RoleGrantResource,
}
