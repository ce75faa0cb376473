pub mod role_grant;
