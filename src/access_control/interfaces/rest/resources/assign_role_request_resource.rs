use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::{
    access_control::domain::model::enums::app_role::AppRole,
    shared::interfaces::rest::request_validation::ValidationOrder,
};

pub const INVALID_ROLE_MESSAGE: &str = "Invalid role. Must be \"admin\" or \"client\"";

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignRoleRequestResource {
    #[serde(default)]
    #[validate(length(min = 1, message = "userId and role are required"))]
    pub user_id: String,
    #[serde(default)]
    #[schema(example = "client")]
    #[validate(custom(function = "validate_app_role"))]
    pub role: String,
}

impl ValidationOrder for AssignRoleRequestResource {
    const FIELD_ORDER: &'static [&'static str] = &["user_id", "role"];
}

fn validate_app_role(role: &str) -> Result<(), ValidationError> {
    if role.is_empty() {
        return Err(ValidationError::new("required")
            .with_message(Cow::Borrowed("userId and role are required")));
    }

    parse_app_role(role)
}

/// An empty role is rejected like any other unknown one.
pub fn parse_app_role(role: &str) -> Result<(), ValidationError> {
    role.parse::<AppRole>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("role").with_message(Cow::Borrowed(INVALID_ROLE_MESSAGE)))
}
