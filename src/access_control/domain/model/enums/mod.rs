pub mod access_control_domain_error;
pub mod app_role;
pub mod role_audit_action;
