pub mod access_control_command_service;
pub mod access_control_query_service;
pub mod role_audit_sink;
