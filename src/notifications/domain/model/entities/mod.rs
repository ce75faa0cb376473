pub mod admin_notification;
