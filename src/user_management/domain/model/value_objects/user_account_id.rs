use uuid::Uuid;

use crate::user_management::domain::model::enums::user_management_domain_error::UserManagementDomainError;

/// Account ids that parse as UUIDs are stored in lowercase hyphenated form,
/// so the same account always compares equal regardless of input casing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct UserAccountId(String);

impl UserAccountId {
    pub fn new(value: String) -> Result<Self, UserManagementDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(UserManagementDomainError::InvalidUserId);
        }

        let canonical = match Uuid::parse_str(trimmed) {
            Ok(uuid) => uuid.hyphenated().to_string(),
            Err(_) => trimmed.to_string(),
        };
        Ok(Self(canonical))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
