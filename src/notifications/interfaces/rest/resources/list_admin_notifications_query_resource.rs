use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListAdminNotificationsQueryResource {
    pub limit: Option<i64>,
    pub unread_only: Option<bool>,
}
