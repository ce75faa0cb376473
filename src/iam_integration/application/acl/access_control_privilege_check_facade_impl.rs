use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    access_control::interfaces::acl::access_control_facade::AccessControlFacade,
    iam_integration::{
        domain::model::value_objects::authenticated_user_id::AuthenticatedUserId,
        interfaces::acl::privilege_check_facade::PrivilegeCheckFacade,
    },
};

pub struct AccessControlPrivilegeCheckFacadeImpl {
    facade: Arc<dyn AccessControlFacade>,
}

impl AccessControlPrivilegeCheckFacadeImpl {
    pub fn new(facade: Arc<dyn AccessControlFacade>) -> Self {
        Self { facade }
    }
}

#[async_trait]
impl PrivilegeCheckFacade for AccessControlPrivilegeCheckFacadeImpl {
    async fn has_privilege(
        &self,
        user_id: &AuthenticatedUserId,
        privilege: &str,
    ) -> Result<bool, String> {
        self.facade
            .has_role(user_id.value(), privilege)
            .await
            .map_err(|e| e.to_string())
    }
}
