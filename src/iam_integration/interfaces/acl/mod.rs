pub mod admin_authorization_gate;
pub mod iam_authentication_facade;
pub mod privilege_check_facade;
