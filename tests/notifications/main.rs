mod support;

mod notification_sink_tests;
mod notification_tests;
