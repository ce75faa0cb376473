use crate::user_management::domain::model::{
    enums::user_management_domain_error::UserManagementDomainError,
    value_objects::user_account_id::UserAccountId,
};

/// Validated before any deletion starts: a list that names the requester
/// is rejected as a whole.
#[derive(Clone, Debug)]
pub struct BulkDeleteUsersCommand {
    requested_by: UserAccountId,
    requested_by_email: Option<String>,
    user_ids: Vec<UserAccountId>,
}

impl BulkDeleteUsersCommand {
    pub fn new(
        requested_by: String,
        requested_by_email: Option<String>,
        user_ids: Vec<String>,
    ) -> Result<Self, UserManagementDomainError> {
        if user_ids.is_empty() {
            return Err(UserManagementDomainError::EmptyUserIdList);
        }

        let requested_by = UserAccountId::new(requested_by)?;
        let user_ids = user_ids
            .into_iter()
            .map(UserAccountId::new)
            .collect::<Result<Vec<_>, _>>()?;

        if user_ids.contains(&requested_by) {
            return Err(UserManagementDomainError::SelfDeletionForbidden);
        }

        Ok(Self {
            requested_by,
            requested_by_email,
            user_ids,
        })
    }

    pub fn requested_by(&self) -> &UserAccountId {
        &self.requested_by
    }
    pub fn requested_by_email(&self) -> Option<&str> {
        self.requested_by_email.as_deref()
    }
    pub fn user_ids(&self) -> &[UserAccountId] {
        &self.user_ids
    }
}
