#[path = "support/fakes.rs"]
pub mod fakes;

pub use fixtures::{
    ADMIN_ID, ADMIN_TOKEN, AUDITED_USER_ID, CLIENT_ID, CLIENT_TOKEN, USER_1_ID, USER_2_ID,
    assign_role_command, bearer_headers, bulk_assign_role_command,
};
pub use harness::{create_command_harness, create_controller_harness};
