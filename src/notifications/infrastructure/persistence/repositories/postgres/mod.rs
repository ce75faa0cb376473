pub mod sqlx_admin_notification_repository_impl;
