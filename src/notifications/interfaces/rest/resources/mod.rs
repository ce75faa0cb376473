pub mod admin_notification_resource;
pub mod list_admin_notifications_query_resource;
pub mod mark_all_notifications_read_response_resource;
