pub mod bulk_operation_response_resource;
pub mod error_response_resource;
