use std::str::FromStr;

use super::access_control_domain_error::AccessControlDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RoleAuditAction {
    Assigned,
}

impl RoleAuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
        }
    }
}

impl FromStr for RoleAuditAction {
    type Err = AccessControlDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "assigned" => Ok(Self::Assigned),
            other => Err(AccessControlDomainError::InfrastructureError(format!(
                "unknown audit action stored: {other}"
            ))),
        }
    }
}
