use uuid::Uuid;

use crate::access_control::domain::model::{
    enums::access_control_domain_error::AccessControlDomainError, value_objects::user_id::UserId,
};

pub const DEFAULT_AUDIT_LOG_LIMIT: i64 = 50;
pub const MAX_AUDIT_LOG_LIMIT: i64 = 200;

#[derive(Clone, Debug)]
pub struct ListRoleAuditLogsQuery {
    user_id: Option<UserId>,
    limit: i64,
}

impl ListRoleAuditLogsQuery {
    pub fn new(
        user_id: Option<String>,
        limit: Option<i64>,
    ) -> Result<Self, AccessControlDomainError> {
        let user_id = user_id
            .map(|raw| {
                let user_id = UserId::new(raw)?;
                let uuid = Uuid::parse_str(user_id.value())
                    .map_err(|_| AccessControlDomainError::InvalidUserIdFilter)?;
                UserId::new(uuid.hyphenated().to_string())
            })
            .transpose()?;

        Ok(Self {
            user_id,
            limit: limit
                .unwrap_or(DEFAULT_AUDIT_LOG_LIMIT)
                .clamp(1, MAX_AUDIT_LOG_LIMIT),
        })
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }
    pub fn limit(&self) -> i64 {
        self.limit
    }
}
