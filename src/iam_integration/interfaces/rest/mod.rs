pub mod admin_request_authorization;
