use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use highlight_admin_api::shared::application::best_effort_queue::{
    BestEffortQueue, BestEffortQueuePolicy, drain_side_effect_workers,
};

#[tokio::test]
async fn drain_flushes_entries_still_queued_at_shutdown() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let sink = written.clone();
    let (queue, worker) = BestEffortQueue::spawn(
        "test_channel",
        BestEffortQueuePolicy::default(),
        move |entry: u32| {
            let sink = sink.clone();
            async move {
                tokio::time::sleep(Duration::from_millis(10)).await;
                sink.lock().expect("lock").push(entry);
                Ok(())
            }
        },
    );

    for entry in 1..=5 {
        queue.enqueue(entry);
    }
    drop(queue);

    let unflushed =
        drain_side_effect_workers(vec![("test_channel", worker)], Duration::from_secs(5)).await;

    assert_eq!(unflushed, 0);
    assert_eq!(*written.lock().expect("lock"), vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn drain_retries_failed_writes_before_finishing() {
    let attempts = Arc::new(Mutex::new(0u32));
    let counter = attempts.clone();
    let policy = BestEffortQueuePolicy {
        capacity: 8,
        max_attempts: 3,
        retry_backoff: Duration::from_millis(5),
    };
    let (queue, worker) = BestEffortQueue::spawn("test_channel", policy, move |_entry: u32| {
        let counter = counter.clone();
        async move {
            let mut attempts = counter.lock().expect("lock");
            *attempts += 1;
            if *attempts < 3 {
                Err("store unavailable".to_string())
            } else {
                Ok(())
            }
        }
    });

    queue.enqueue(7);
    drop(queue);

    let unflushed =
        drain_side_effect_workers(vec![("test_channel", worker)], Duration::from_secs(5)).await;

    assert_eq!(unflushed, 0);
    assert_eq!(*attempts.lock().expect("lock"), 3);
}

#[tokio::test]
async fn drain_reports_worker_stuck_past_deadline() {
    let (queue, worker) = BestEffortQueue::spawn(
        "stuck_channel",
        BestEffortQueuePolicy::default(),
        |_entry: u32| async {
            std::future::pending::<()>().await;
            Ok(())
        },
    );

    queue.enqueue(1);
    drop(queue);

    let unflushed =
        drain_side_effect_workers(vec![("stuck_channel", worker)], Duration::from_millis(50))
            .await;

    assert_eq!(unflushed, 1);
}
