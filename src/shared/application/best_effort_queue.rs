use std::{future::Future, time::Duration};

use tokio::{
    sync::mpsc::{self, error::TrySendError},
    task::JoinHandle,
};
use tracing::{debug, error, warn};

use crate::config::app_config::AppConfig;

#[derive(Clone, Copy, Debug)]
pub struct BestEffortQueuePolicy {
    pub capacity: usize,
    pub max_attempts: u32,
    pub retry_backoff: Duration,
}

impl BestEffortQueuePolicy {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            capacity: config.side_effect_queue_capacity,
            max_attempts: config.side_effect_max_attempts,
            retry_backoff: config.side_effect_retry_backoff(),
        }
    }
}

impl Default for BestEffortQueuePolicy {
    fn default() -> Self {
        Self {
            capacity: 1024,
            max_attempts: 3,
            retry_backoff: Duration::from_millis(200),
        }
    }
}

/// Bounded fire-and-forget queue for side-channel writes (audit entries,
/// notifications). A background worker drains it, retrying each item with a
/// linear backoff; items that still fail are logged and dropped.
pub struct BestEffortQueue<T> {
    channel: &'static str,
    sender: mpsc::Sender<T>,
}

impl<T> BestEffortQueue<T>
where
    T: Clone + Send + 'static,
{
    pub fn spawn<F, Fut>(
        channel: &'static str,
        policy: BestEffortQueuePolicy,
        write: F,
    ) -> (Self, JoinHandle<()>)
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), String>> + Send + 'static,
    {
        let (sender, mut receiver) = mpsc::channel::<T>(policy.capacity.max(1));
        let max_attempts = policy.max_attempts.max(1);

        let worker = tokio::spawn(async move {
            while let Some(item) = receiver.recv().await {
                let mut attempt = 1;
                loop {
                    match write(item.clone()).await {
                        Ok(()) => break,
                        Err(write_error) if attempt < max_attempts => {
                            warn!(channel, attempt, error = %write_error, "side-channel write failed, retrying");
                            tokio::time::sleep(policy.retry_backoff * attempt).await;
                            attempt += 1;
                        }
                        Err(write_error) => {
                            error!(channel, attempts = attempt, error = %write_error, "side-channel write dropped");
                            break;
                        }
                    }
                }
            }
            debug!(channel, "side-channel queue closed");
        });

        (Self { channel, sender }, worker)
    }

    pub fn enqueue(&self, item: T) {
        match self.sender.try_send(item) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                warn!(channel = self.channel, "side-channel queue full, entry dropped");
            }
            Err(TrySendError::Closed(_)) => {
                warn!(channel = self.channel, "side-channel queue closed, entry dropped");
            }
        }
    }
}

/// Waits for queue workers to flush what is left once every sink handle has
/// been dropped. Workers still busy at the deadline are aborted and reported.
/// Returns the number of channels that could not be flushed.
pub async fn drain_side_effect_workers(
    workers: Vec<(&'static str, JoinHandle<()>)>,
    timeout: Duration,
) -> usize {
    let deadline = tokio::time::Instant::now() + timeout;
    let mut unflushed = 0;

    for (channel, mut worker) in workers {
        match tokio::time::timeout_at(deadline, &mut worker).await {
            Ok(Ok(())) => debug!(channel, "side-channel queue drained"),
            Ok(Err(join_error)) => {
                unflushed += 1;
                warn!(channel, error = %join_error, "side-channel worker ended abnormally, pending entries lost");
            }
            Err(_) => {
                unflushed += 1;
                worker.abort();
                warn!(channel, "side-channel queue not drained before shutdown, pending entries lost");
            }
        }
    }

    unflushed
}
