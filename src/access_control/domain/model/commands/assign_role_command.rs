use crate::access_control::domain::model::{
    enums::{access_control_domain_error::AccessControlDomainError, app_role::AppRole},
    value_objects::user_id::UserId,
};

#[derive(Clone, Debug)]
pub struct AssignRoleCommand {
    changed_by: UserId,
    user_id: UserId,
    role: AppRole,
}

impl AssignRoleCommand {
    pub fn new(
        changed_by: String,
        user_id: String,
        role: String,
    ) -> Result<Self, AccessControlDomainError> {
        Ok(Self {
            changed_by: UserId::new(changed_by)?,
            user_id: UserId::new(user_id)?,
            role: role.trim().parse()?,
        })
    }

    pub fn changed_by(&self) -> &UserId {
        &self.changed_by
    }
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
    pub fn role(&self) -> AppRole {
        self.role
    }
}
