pub mod notification_command_service;
pub mod notification_query_service;
