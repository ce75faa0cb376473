pub mod user_management_rest_controller;
