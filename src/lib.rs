pub mod access_control;
pub mod config;
pub mod iam_integration;
pub mod notifications;
pub mod shared;
pub mod user_management;
