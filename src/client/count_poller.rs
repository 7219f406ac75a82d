use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::client::PortalClient;

/// Keeps a subscriber count fresh by polling the API at a fixed period.
///
/// The first fetch happens immediately. Values may be stale by up to one
/// period. Dropping the poller cancels the background task.
#[derive(Debug)]
pub struct SubscriberCountPoller {
    latest: watch::Receiver<Option<i64>>,
    task: JoinHandle<()>,
}

impl SubscriberCountPoller {
    pub const DEFAULT_PERIOD: Duration = Duration::from_secs(30);

    pub fn spawn(client: Arc<PortalClient>, period: Duration) -> Self {
        let (tx, latest) = watch::channel(None);

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                match client.subscriber_count().await {
                    Ok(count) => {
                        if tx.send(Some(count)).is_err() {
                            break;
                        }
                    }
                    // Keep showing the last known count
                    Err(e) => {
                        tracing::warn!(error.cause_chain = ?e, "Failed to refresh subscriber count")
                    }
                }
            }
        });

        Self { latest, task }
    }

    /// Last fetched count, `None` until the first successful fetch
    pub fn latest(&self) -> Option<i64> {
        *self.latest.borrow()
    }

    /// Wait for the next successful fetch
    pub async fn changed(&mut self) -> Option<i64> {
        self.latest.changed().await.ok()?;
        *self.latest.borrow_and_update()
    }
}

impl Drop for SubscriberCountPoller {
    fn drop(&mut self) {
        self.task.abort();
    }
}
