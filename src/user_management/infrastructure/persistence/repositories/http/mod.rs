pub mod http_user_account_repository_impl;
