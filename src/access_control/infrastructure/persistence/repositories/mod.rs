pub mod postgres;
pub mod role_audit_log_repository;
pub mod role_grant_repository;
