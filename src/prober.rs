use futures::stream::{self, StreamExt};
use log::debug;
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;

/// Bounded-concurrency task runner shared by every probing stage.
///
/// Each stage builds its own `Prober` scoped to one batch of work; the pool
/// does not outlive the batch. At most `concurrency` operations are in
/// flight at once and each is bounded by `per_item_timeout`. A timeout or an
/// error from one operation yields an absent result for that item only and
/// never cancels its siblings.
pub struct Prober {
    concurrency: usize,
    per_item_timeout: Duration,
}

impl Prober {
    pub fn new(concurrency: usize, per_item_timeout: Duration) -> Self {
        Self {
            concurrency: concurrency.max(1),
            per_item_timeout,
        }
    }

    /// Run `op` once per item and collect the positive outcomes.
    ///
    /// Completion order is not submission order, so `op` must tag each
    /// result with the item it came from (the probed address, port, ...)
    /// rather than relying on index alignment. Returns once every item has
    /// resolved: produced a result, reported a miss, failed, or timed out.
    pub async fn run<T, R, F, Fut>(&self, items: Vec<T>, op: F) -> Vec<R>
    where
        F: Fn(T) -> Fut,
        Fut: Future<Output = crate::Result<Option<R>>>,
    {
        let per_item_timeout = self.per_item_timeout;

        let outcomes = stream::iter(items)
            .map(|item| {
                let probe = op(item);
                async move {
                    match timeout(per_item_timeout, probe).await {
                        Ok(Ok(hit)) => hit,
                        Ok(Err(e)) => {
                            debug!("Probe failed: {}", e);
                            None
                        }
                        Err(_) => None,
                    }
                }
            })
            .buffer_unordered(self.concurrency)
            .collect::<Vec<_>>()
            .await;

        outcomes.into_iter().flatten().collect()
    }
}
