pub mod access_control_privilege_check_facade_impl;
pub mod admin_authorization_gate_impl;
pub mod http_iam_authentication_facade_impl;
