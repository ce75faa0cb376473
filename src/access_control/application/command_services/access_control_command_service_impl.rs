use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::{
    access_control::{
        domain::{
            model::{
                commands::{
                    assign_role_command::AssignRoleCommand,
                    bulk_assign_role_command::BulkAssignRoleCommand,
                },
                entities::role_grant::RoleGrant,
                enums::{access_control_domain_error::AccessControlDomainError, app_role::AppRole},
                events::role_change_audited_event::RoleChangeAuditedEvent,
                value_objects::user_id::UserId,
            },
            services::{
                access_control_command_service::{
                    AccessControlCommandService, RoleAssignmentResult,
                },
                role_audit_sink::RoleAuditSink,
            },
        },
        infrastructure::persistence::repositories::role_grant_repository::RoleGrantRepository,
    },
    notifications::{
        domain::model::entities::admin_notification::AdminNotification,
        interfaces::acl::admin_notification_sink::AdminNotificationSink,
    },
    shared::domain::model::bulk_operation_outcome::BulkOperationOutcome,
};

pub struct AccessControlCommandServiceImpl {
    role_grant_repository: Arc<dyn RoleGrantRepository>,
    audit_sink: Arc<dyn RoleAuditSink>,
    notification_sink: Arc<dyn AdminNotificationSink>,
}

impl AccessControlCommandServiceImpl {
    pub fn new(
        role_grant_repository: Arc<dyn RoleGrantRepository>,
        audit_sink: Arc<dyn RoleAuditSink>,
        notification_sink: Arc<dyn AdminNotificationSink>,
    ) -> Self {
        Self {
            role_grant_repository,
            audit_sink,
            notification_sink,
        }
    }

    /// Replaces whatever the user holds with a single grant of `role`.
    async fn replace_grants(
        &self,
        user_id: &UserId,
        role: AppRole,
        changed_by: &UserId,
    ) -> Result<RoleGrant, AccessControlDomainError> {
        self.role_grant_repository
            .delete_grants_for_user(user_id)
            .await?;
        let grant = self
            .role_grant_repository
            .insert_grant(user_id, role)
            .await?;

        info!(
            user_id = user_id.value(),
            role = role.as_str(),
            changed_by = changed_by.value(),
            "role assigned"
        );

        self.audit_sink
            .record(RoleChangeAuditedEvent::assigned(
                user_id.clone(),
                role,
                changed_by.clone(),
                Utc::now(),
            ))
            .await;

        Ok(grant)
    }
}

#[async_trait]
impl AccessControlCommandService for AccessControlCommandServiceImpl {
    async fn handle_assign_role(
        &self,
        command: AssignRoleCommand,
    ) -> Result<RoleAssignmentResult, AccessControlDomainError> {
        let mut current = self
            .role_grant_repository
            .find_grants_by_user(command.user_id())
            .await?;

        if current.len() == 1 && current[0].role() == command.role() {
            info!(
                user_id = command.user_id().value(),
                role = command.role().as_str(),
                "role already held, nothing to change"
            );
            return Ok(RoleAssignmentResult {
                grant: current.remove(0),
                changed: false,
            });
        }

        let grant = self
            .replace_grants(command.user_id(), command.role(), command.changed_by())
            .await?;

        Ok(RoleAssignmentResult {
            grant,
            changed: true,
        })
    }

    async fn handle_bulk_assign_role(
        &self,
        command: BulkAssignRoleCommand,
    ) -> Result<BulkOperationOutcome, AccessControlDomainError> {
        let mut outcome = BulkOperationOutcome::new();

        for user_id in command.user_ids() {
            match self
                .replace_grants(user_id, command.role(), command.changed_by())
                .await
            {
                Ok(_) => outcome.record_success(),
                Err(error) => {
                    warn!(
                        user_id = user_id.value(),
                        role = command.role().as_str(),
                        error = %error,
                        "bulk role assignment failed for user"
                    );
                    outcome.record_failure(user_id.value(), error.to_string());
                }
            }
        }

        info!(
            role = command.role().as_str(),
            success_count = outcome.success_count(),
            failure_count = outcome.failure_count(),
            total = outcome.total(),
            partial_failure = outcome.is_partial_failure(),
            changed_by = command.changed_by().value(),
            "bulk role assignment completed"
        );

        self.notification_sink
            .publish(AdminNotification::bulk_role_assignment(
                command.role().as_str(),
                outcome.success_count(),
                outcome.failure_count(),
                command.changed_by().value(),
            ))
            .await;

        Ok(outcome)
    }
}
