pub mod user_management_command_service_impl;
