pub mod user_account_id;
