pub mod mark_notification_read_command;
