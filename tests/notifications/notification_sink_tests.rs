use std::{sync::Arc, time::Duration};

use highlight_admin_api::{
    notifications::{
        application::side_effects::admin_notification_sink_impl::{
            DirectAdminNotificationSinkImpl, QueuedAdminNotificationSinkImpl,
        },
        domain::model::entities::admin_notification::AdminNotification,
        interfaces::acl::admin_notification_sink::AdminNotificationSink,
    },
    shared::application::best_effort_queue::BestEffortQueuePolicy,
};

use crate::support::fakes::InMemoryAdminNotificationRepository;

#[tokio::test]
async fn direct_sink_stores_notification() {
    let repository = Arc::new(InMemoryAdminNotificationRepository::new());
    let sink = DirectAdminNotificationSinkImpl::new(repository.clone());

    sink.publish(AdminNotification::bulk_user_deletion(2, "A1", None))
        .await;

    let records = repository.records();
    assert_eq!(records.len(), 1);
    assert!(!records[0].read);
}

#[tokio::test]
async fn direct_sink_swallows_write_failure() {
    let repository = Arc::new(InMemoryAdminNotificationRepository::new());
    repository.fail_next_inserts(1);
    let sink = DirectAdminNotificationSinkImpl::new(repository.clone());

    sink.publish(AdminNotification::bulk_user_deletion(2, "A1", None))
        .await;

    assert_eq!(repository.insert_calls(), 1);
    assert!(repository.records().is_empty());
}

#[tokio::test]
async fn queued_sink_delivers_after_transient_failure() {
    let repository = Arc::new(InMemoryAdminNotificationRepository::new());
    repository.fail_next_inserts(1);
    let (sink, worker) = QueuedAdminNotificationSinkImpl::spawn(
        repository.clone(),
        BestEffortQueuePolicy {
            capacity: 4,
            max_attempts: 3,
            retry_backoff: Duration::from_millis(1),
        },
    );

    sink.publish(AdminNotification::bulk_role_assignment("admin", 1, 0, "A1"))
        .await;
    drop(sink);
    worker.await.expect("worker should stop once the queue closes");

    assert_eq!(repository.insert_calls(), 2);
    assert_eq!(repository.records().len(), 1);
}
