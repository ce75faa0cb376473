pub mod bulk_delete_users_request_resource;
