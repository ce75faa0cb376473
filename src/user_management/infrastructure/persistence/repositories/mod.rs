pub mod http;
pub mod user_account_repository;
