pub mod admin_notification_sink;
