use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::{
    access_control::{
        domain::{
            model::events::role_change_audited_event::RoleChangeAuditedEvent,
            services::role_audit_sink::RoleAuditSink,
        },
        infrastructure::persistence::repositories::role_audit_log_repository::RoleAuditLogRepository,
    },
    shared::application::best_effort_queue::{BestEffortQueue, BestEffortQueuePolicy},
};

pub struct DirectRoleAuditSinkImpl {
    repository: Arc<dyn RoleAuditLogRepository>,
}

impl DirectRoleAuditSinkImpl {
    pub fn new(repository: Arc<dyn RoleAuditLogRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RoleAuditSink for DirectRoleAuditSinkImpl {
    async fn record(&self, event: RoleChangeAuditedEvent) {
        if let Err(error) = self.repository.append(&event).await {
            warn!(
                user_id = event.user_id.value(),
                role = event.role.as_str(),
                error = %error,
                "role audit entry not stored"
            );
        }
    }
}

pub struct QueuedRoleAuditSinkImpl {
    queue: BestEffortQueue<RoleChangeAuditedEvent>,
}

impl QueuedRoleAuditSinkImpl {
    pub fn spawn(
        repository: Arc<dyn RoleAuditLogRepository>,
        policy: BestEffortQueuePolicy,
    ) -> (Self, JoinHandle<()>) {
        let (queue, worker) = BestEffortQueue::spawn("role_audit_logs", policy, move |event| {
            let repository = repository.clone();
            async move { repository.append(&event).await.map_err(|e| e.to_string()) }
        });

        (Self { queue }, worker)
    }
}

#[async_trait]
impl RoleAuditSink for QueuedRoleAuditSinkImpl {
    async fn record(&self, event: RoleChangeAuditedEvent) {
        self.queue.enqueue(event);
    }
}
