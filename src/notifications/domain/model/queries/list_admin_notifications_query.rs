pub const DEFAULT_NOTIFICATION_LIMIT: i64 = 50;
pub const MAX_NOTIFICATION_LIMIT: i64 = 200;

#[derive(Clone, Debug)]
pub struct ListAdminNotificationsQuery {
    limit: i64,
    unread_only: bool,
}

impl ListAdminNotificationsQuery {
    pub fn new(limit: Option<i64>, unread_only: Option<bool>) -> Self {
        Self {
            limit: limit
                .unwrap_or(DEFAULT_NOTIFICATION_LIMIT)
                .clamp(1, MAX_NOTIFICATION_LIMIT),
            unread_only: unread_only.unwrap_or(false),
        }
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }
    pub fn unread_only(&self) -> bool {
        self.unread_only
    }
}
