pub mod notification_id;
