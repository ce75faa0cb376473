pub mod role_audit_sink_impl;
