use async_trait::async_trait;

use crate::access_control::domain::model::events::role_change_audited_event::RoleChangeAuditedEvent;

/// Append-only destination for role audit entries. Infallible from the caller's
/// side: write failures are handled (logged, retried or dropped) by the sink.
#[async_trait]
pub trait RoleAuditSink: Send + Sync {
    async fn record(&self, event: RoleChangeAuditedEvent);
}
