pub mod assign_role_command;
pub mod bulk_assign_role_command;
