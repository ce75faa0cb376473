pub mod list_admin_notifications_query;
