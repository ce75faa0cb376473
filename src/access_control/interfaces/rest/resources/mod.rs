pub mod assign_role_request_resource;
pub mod assign_role_response_resource;
pub mod bulk_assign_role_request_resource;
pub mod role_audit_log_resource;
