pub mod notification_command_service_impl;
