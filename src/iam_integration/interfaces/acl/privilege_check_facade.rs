use async_trait::async_trait;

use crate::iam_integration::domain::model::value_objects::authenticated_user_id::AuthenticatedUserId;

pub const ADMIN_PRIVILEGE: &str = "admin";

#[async_trait]
pub trait PrivilegeCheckFacade: Send + Sync {
    async fn has_privilege(
        &self,
        user_id: &AuthenticatedUserId,
        privilege: &str,
    ) -> Result<bool, String>;
}
