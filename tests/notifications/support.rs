
pub use harness::{admin_headers, create_controller_harness};
