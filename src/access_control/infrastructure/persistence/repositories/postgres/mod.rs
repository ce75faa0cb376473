pub mod sqlx_role_audit_log_repository_impl;
pub mod sqlx_role_grant_repository_impl;
