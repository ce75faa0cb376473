use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::interfaces::rest::request_validation::ValidationOrder;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteUsersRequestResource {
    #[serde(default)]
    #[validate(length(min = 1, message = "userIds array is required and must not be empty"))]
    pub user_ids: Vec<String>,
}

impl ValidationOrder for BulkDeleteUsersRequestResource {
    const FIELD_ORDER: &'static [&'static str] = &["user_ids"];
}
