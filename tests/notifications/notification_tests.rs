use highlight_admin_api::notifications::domain::model::{
    commands::mark_notification_read_command::MarkNotificationReadCommand,
    entities::admin_notification::AdminNotification,
    enums::{
        notification_domain_error::NotificationDomainError,
        notification_severity::NotificationSeverity, notification_type::NotificationType,
    },
    queries::list_admin_notifications_query::ListAdminNotificationsQuery,
};
use serde_json::json;

#[test]
fn bulk_user_deletion_summary_is_a_warning() {
    let notification = AdminNotification::bulk_user_deletion(3, "A1", None);

    assert_eq!(notification.title(), "Bulk User Deletion Completed");
    assert_eq!(notification.message(), "Successfully deleted 3 users");
    assert_eq!(notification.notification_type(), NotificationType::BulkAction);
    assert_eq!(notification.severity(), NotificationSeverity::Warning);
    assert_eq!(
        notification.metadata(),
        &json!({ "user_count": 3, "deleted_by": "A1", "deleted_by_email": null })
    );
}

#[test]
fn bulk_role_assignment_summary_is_informational() {
    let notification = AdminNotification::bulk_role_assignment("client", 4, 1, "A1");

    assert_eq!(notification.message(), "Assigned role client to 4 users");
    assert_eq!(notification.severity(), NotificationSeverity::Info);
    assert_eq!(notification.metadata()["failure_count"], json!(1));
}

#[test]
fn severity_and_type_round_trip_their_stored_names() {
    for severity in [
        NotificationSeverity::Info,
        NotificationSeverity::Warning,
        NotificationSeverity::Critical,
    ] {
        assert_eq!(severity.as_str().parse::<NotificationSeverity>().ok(), Some(severity));
    }
    assert!("bulk_action".parse::<NotificationType>().is_ok());
    assert!("fatal".parse::<NotificationSeverity>().is_err());
}

#[test]
fn mark_read_command_requires_uuid() {
    assert!(matches!(
        MarkNotificationReadCommand::new("not-a-uuid"),
        Err(NotificationDomainError::InvalidNotificationId)
    ));
    assert!(MarkNotificationReadCommand::new("3f2b8a4e-0c1d-4e5f-9a6b-7c8d9e0f1a2b").is_ok());
}

#[test]
fn list_query_defaults() {
    let query = ListAdminNotificationsQuery::new(None, None);

    assert_eq!(query.limit(), 50);
    assert!(!query.unread_only());
    assert_eq!(ListAdminNotificationsQuery::new(Some(-4), None).limit(), 1);
}
