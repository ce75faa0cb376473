use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct MarkAllNotificationsReadResponseResource {
    pub updated: u64,
}
