pub mod role_change_audited_event;
