use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use async_trait::async_trait;
use chrono::Utc;
use highlight_admin_api::{
    access_control::{
        domain::{
            model::{
                entities::role_grant::RoleGrant,
                enums::{access_control_domain_error::AccessControlDomainError, app_role::AppRole},
                events::role_change_audited_event::RoleChangeAuditedEvent,
                queries::list_role_audit_logs_query::ListRoleAuditLogsQuery,
                value_objects::user_id::UserId,
            },
            services::role_audit_sink::RoleAuditSink,
        },
        infrastructure::persistence::repositories::{
            role_audit_log_repository::{RoleAuditLogRecord, RoleAuditLogRepository},
            role_grant_repository::RoleGrantRepository,
        },
    },
    iam_integration::{
        domain::model::value_objects::authenticated_user_id::AuthenticatedUserId,
        interfaces::acl::iam_authentication_facade::{
            IamAuthenticationFacade, IamIntegrationError, VerifiedUserContext,
        },
    },
    notifications::{
        domain::model::entities::admin_notification::AdminNotification,
        interfaces::acl::admin_notification_sink::AdminNotificationSink,
    },
};
use uuid::Uuid;

#[derive(Default)]
struct InMemoryRoleGrantState {
    grants: Vec<RoleGrant>,
    fail_delete_for: HashSet<String>,
    fail_insert_for: HashSet<String>,
    delete_calls: usize,
    insert_calls: usize,
}

pub struct InMemoryRoleGrantRepository {
    state: Mutex<InMemoryRoleGrantState>,
}

impl InMemoryRoleGrantRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(InMemoryRoleGrantState::default()),
        }
    }

    /// Seeds a grant without counting it as a write.
    pub fn seed(&self, user_id: &str, role: AppRole) {
        self.state.lock().expect("mutex poisoned").grants.push(RoleGrant::restore(
            Uuid::new_v4(),
            UserId::new(user_id.to_string()).expect("valid user id"),
            role,
            Utc::now(),
        ));
    }

    pub fn fail_delete_for(&self, user_id: &str) {
        self.state
            .lock()
            .expect("mutex poisoned")
            .fail_delete_for
            .insert(user_id.to_string());
    }

    pub fn fail_insert_for(&self, user_id: &str) {
        self.state
            .lock()
            .expect("mutex poisoned")
            .fail_insert_for
            .insert(user_id.to_string());
    }

    pub fn roles_of(&self, user_id: &str) -> Vec<AppRole> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .grants
            .iter()
            .filter(|grant| grant.user_id().value() == user_id)
            .map(|grant| grant.role())
            .collect()
    }

    pub fn write_calls(&self) -> usize {
        let state = self.state.lock().expect("mutex poisoned");
        state.delete_calls + state.insert_calls
    }
}

#[async_trait]
impl RoleGrantRepository for InMemoryRoleGrantRepository {
    async fn find_grants_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<RoleGrant>, AccessControlDomainError> {
        Ok(self
            .state
            .lock()
            .expect("mutex poisoned")
            .grants
            .iter()
            .filter(|grant| grant.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn has_role(
        &self,
        user_id: &UserId,
        role: AppRole,
    ) -> Result<bool, AccessControlDomainError> {
        Ok(self
            .state
            .lock()
            .expect("mutex poisoned")
            .grants
            .iter()
            .any(|grant| grant.user_id() == user_id && grant.role() == role))
    }

    async fn delete_grants_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<u64, AccessControlDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.delete_calls += 1;
        if state.fail_delete_for.contains(user_id.value()) {
            return Err(AccessControlDomainError::InfrastructureError(
                "delete failed".to_string(),
            ));
        }

        let before = state.grants.len();
        state.grants.retain(|grant| grant.user_id() != user_id);
        Ok((before - state.grants.len()) as u64)
    }

    async fn insert_grant(
        &self,
        user_id: &UserId,
        role: AppRole,
    ) -> Result<RoleGrant, AccessControlDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.insert_calls += 1;
        if state.fail_insert_for.contains(user_id.value()) {
            return Err(AccessControlDomainError::InfrastructureError(
                "insert failed".to_string(),
            ));
        }

        let grant = RoleGrant::restore(Uuid::new_v4(), user_id.clone(), role, Utc::now());
        state.grants.push(grant.clone());
        Ok(grant)
    }
}

pub struct RecordingRoleAuditSink {
    events: Mutex<Vec<RoleChangeAuditedEvent>>,
}

impl RecordingRoleAuditSink {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<RoleChangeAuditedEvent> {
        self.events.lock().expect("mutex poisoned").clone()
    }
}

#[async_trait]
impl RoleAuditSink for RecordingRoleAuditSink {
    async fn record(&self, event: RoleChangeAuditedEvent) {
        self.events.lock().expect("mutex poisoned").push(event);
    }
}

#[derive(Default)]
struct FakeRoleAuditLogState {
    records: Vec<RoleAuditLogRecord>,
    failures_remaining: usize,
    append_calls: usize,
    last_query: Option<ListRoleAuditLogsQuery>,
}

pub struct FakeRoleAuditLogRepository {
    state: Mutex<FakeRoleAuditLogState>,
}

impl FakeRoleAuditLogRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeRoleAuditLogState::default()),
        }
    }

    /// The next `count` appends fail before any succeeds.
    pub fn fail_next_appends(&self, count: usize) {
        self.state.lock().expect("mutex poisoned").failures_remaining = count;
    }

    pub fn records(&self) -> Vec<RoleAuditLogRecord> {
        self.state.lock().expect("mutex poisoned").records.clone()
    }

    pub fn append_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").append_calls
    }

    pub fn last_query(&self) -> Option<ListRoleAuditLogsQuery> {
        self.state.lock().expect("mutex poisoned").last_query.clone()
    }
}

#[async_trait]
impl RoleAuditLogRepository for FakeRoleAuditLogRepository {
    async fn append(&self, event: &RoleChangeAuditedEvent) -> Result<(), AccessControlDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.append_calls += 1;
        if state.failures_remaining > 0 {
            state.failures_remaining -= 1;
            return Err(AccessControlDomainError::InfrastructureError(
                "audit insert failed".to_string(),
            ));
        }

        state.records.push(RoleAuditLogRecord {
            id: Uuid::new_v4(),
            user_id: event.user_id.value().to_string(),
            role: event.role,
            changed_by: event.changed_by.value().to_string(),
            action: event.action,
            created_at: event.created_at,
        });
        Ok(())
    }

    async fn list_recent(
        &self,
        query: &ListRoleAuditLogsQuery,
    ) -> Result<Vec<RoleAuditLogRecord>, AccessControlDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.last_query = Some(query.clone());

        let mut records = state
            .records
            .iter()
            .filter(|record| {
                query
                    .user_id()
                    .is_none_or(|user_id| record.user_id == user_id.value())
            })
            .cloned()
            .collect::<Vec<_>>();
        records.sort_by(|left, right| right.created_at.cmp(&left.created_at));
        records.truncate(query.limit() as usize);
        Ok(records)
    }
}

pub struct RecordingNotificationSink {
    notifications: Mutex<Vec<AdminNotification>>,
}

impl RecordingNotificationSink {
    pub fn new() -> Self {
        Self {
            notifications: Mutex::new(Vec::new()),
        }
    }

    pub fn notifications(&self) -> Vec<AdminNotification> {
        self.notifications.lock().expect("mutex poisoned").clone()
    }
}

#[async_trait]
impl AdminNotificationSink for RecordingNotificationSink {
    async fn publish(&self, notification: AdminNotification) {
        self.notifications
            .lock()
            .expect("mutex poisoned")
            .push(notification);
    }
}

/// Resolves a fixed set of tokens to user ids.
pub struct FakeIamAuthenticationFacade {
    users_by_token: HashMap<String, String>,
}

impl FakeIamAuthenticationFacade {
    pub fn new(users_by_token: &[(&str, &str)]) -> Self {
        Self {
            users_by_token: users_by_token
                .iter()
                .map(|(token, user_id)| (token.to_string(), user_id.to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl IamAuthenticationFacade for FakeIamAuthenticationFacade {
    async fn verify_access_token(
        &self,
        access_token: &str,
    ) -> Result<VerifiedUserContext, IamIntegrationError> {
        let user_id = self
            .users_by_token
            .get(access_token)
            .ok_or_else(|| IamIntegrationError::InvalidToken("unknown token".to_string()))?;

        Ok(VerifiedUserContext {
            subject_id: AuthenticatedUserId::new(user_id).map_err(IamIntegrationError::InvalidToken)?,
            email: Some(format!("{}@example.com", user_id.to_lowercase())),
        })
    }
}
