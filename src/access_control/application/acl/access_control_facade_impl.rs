use std::sync::Arc;

use async_trait::async_trait;

use crate::access_control::{
    domain::model::{
        enums::{access_control_domain_error::AccessControlDomainError, app_role::AppRole},
        value_objects::user_id::UserId,
    },
    infrastructure::persistence::repositories::role_grant_repository::RoleGrantRepository,
    interfaces::acl::access_control_facade::AccessControlFacade,
};

pub struct AccessControlFacadeImpl {
    role_grant_repository: Arc<dyn RoleGrantRepository>,
}

impl AccessControlFacadeImpl {
    pub fn new(role_grant_repository: Arc<dyn RoleGrantRepository>) -> Self {
        Self {
            role_grant_repository,
        }
    }
}

#[async_trait]
impl AccessControlFacade for AccessControlFacadeImpl {
    async fn has_role(&self, user_id: &str, role: &str) -> Result<bool, AccessControlDomainError> {
        let Ok(role) = role.parse::<AppRole>() else {
            return Ok(false);
        };
        let user_id = UserId::new(user_id.to_string())?;

        self.role_grant_repository.has_role(&user_id, role).await
    }
}
