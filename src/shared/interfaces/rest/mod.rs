pub mod cors;
pub mod openapi;
pub mod request_validation;
pub mod resources;
