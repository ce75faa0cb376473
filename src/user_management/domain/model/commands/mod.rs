pub mod bulk_delete_users_command;
