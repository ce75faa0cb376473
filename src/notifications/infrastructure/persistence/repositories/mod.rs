pub mod admin_notification_repository;
pub mod postgres;
