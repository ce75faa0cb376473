pub mod list_role_audit_logs_query;
