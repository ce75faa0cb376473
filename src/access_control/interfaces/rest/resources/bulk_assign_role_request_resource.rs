use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    access_control::interfaces::rest::resources::assign_role_request_resource::parse_app_role,
    shared::interfaces::rest::request_validation::ValidationOrder,
};

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkAssignRoleRequestResource {
    #[serde(default)]
    #[validate(length(min = 1, message = "userIds array is required and must not be empty"))]
    pub user_ids: Vec<String>,
    #[serde(default)]
    #[validate(custom(function = "parse_app_role"))]
    pub role: String,
}

impl ValidationOrder for BulkAssignRoleRequestResource {
    const FIELD_ORDER: &'static [&'static str] = &["user_ids", "role"];
}
