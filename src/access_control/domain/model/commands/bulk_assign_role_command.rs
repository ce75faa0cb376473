use crate::access_control::domain::model::{
    enums::{access_control_domain_error::AccessControlDomainError, app_role::AppRole},
    value_objects::user_id::UserId,
};

#[derive(Clone, Debug)]
pub struct BulkAssignRoleCommand {
    changed_by: UserId,
    user_ids: Vec<UserId>,
    role: AppRole,
}

impl BulkAssignRoleCommand {
    pub fn new(
        changed_by: String,
        user_ids: Vec<String>,
        role: String,
    ) -> Result<Self, AccessControlDomainError> {
        if user_ids.is_empty() {
            return Err(AccessControlDomainError::EmptyUserIdList);
        }

        let user_ids = user_ids
            .into_iter()
            .map(UserId::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            changed_by: UserId::new(changed_by)?,
            user_ids,
            role: role.trim().parse()?,
        })
    }

    pub fn changed_by(&self) -> &UserId {
        &self.changed_by
    }
    pub fn user_ids(&self) -> &[UserId] {
        &self.user_ids
    }
    pub fn role(&self) -> AppRole {
        self.role
    }
}
