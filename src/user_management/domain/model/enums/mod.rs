pub mod user_management_domain_error;
