use std::collections::VecDeque;
use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::{Mutex, mpsc};

use crate::contents::NamedContents;
use crate::errors::FailedFile;

/// The result of attempting to retrieve one file.
pub type Outcome = Result<NamedContents, FailedFile>;

/// Retrieves the raw contents of a single file by its resolved path.
///
/// A failure covers only that one path; the pool keeps the remaining
/// paths running.
#[async_trait::async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<String, FailedFile>;
}

/// Downloads every path with at most `max_requests` fetches in flight.
///
/// Spawns `min(max_requests, paths.len())` worker tasks (at least one) over
/// a shared queue. Every queued path produces exactly one outcome, emitted
/// in completion order. Returns only after the workers have exited and the
/// outcome channel has drained.
pub async fn fetch_all<F>(fetcher: Arc<F>, paths: Vec<String>, max_requests: usize) -> Vec<Outcome>
where
    F: ContentFetcher + ?Sized + 'static,
{
    let expected = paths.len();
    if expected == 0 {
        return Vec::new();
    }
    let workers = max_requests.max(1).min(expected);

    let queue = Arc::new(Mutex::new(VecDeque::from(paths)));
    let (tx, mut rx) = mpsc::channel::<Outcome>(expected);

    let handles: Vec<_> = (0..workers)
        .map(|_| {
            let fetcher = Arc::clone(&fetcher);
            let queue = Arc::clone(&queue);
            let tx = tx.clone();
            tokio::spawn(async move {
                loop {
                    let next = queue.lock().await.pop_front();
                    let Some(path) = next else {
                        break;
                    };
                    let outcome = fetcher
                        .fetch(&path)
                        .await
                        .map(|contents| NamedContents::new(path, contents));
                    if tx.send(outcome).await.is_err() {
                        break;
                    }
                }
            })
        })
        .collect();
    // The workers now hold the only senders; the channel closes once the
    // queue is empty and the last worker exits.
    drop(tx);

    let mut outcomes = Vec::with_capacity(expected);
    while let Some(outcome) = rx.recv().await {
        outcomes.push(outcome);
    }
    join_all(handles).await;
    outcomes
}
