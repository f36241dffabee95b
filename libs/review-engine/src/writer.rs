//! Serialized persistence writes.
//!
//! Ratings enqueue the owning collection id on a FIFO channel; a single
//! worker drains it and snapshots the latest in-memory collection state at
//! write time. Two rapid ratings against the same collection therefore
//! produce two writes of current state instead of racing stale copies, and
//! a failed write never blocks the review flow.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use uuid::Uuid;
use vocab_core::CollectionSet;

use crate::error::{Result, SessionError};
use crate::store::CollectionStore;

/// Bounded retry for failed writes.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            delay: Duration::from_millis(500),
        }
    }
}

/// Sending side of the write queue; cheap to clone into sessions.
#[derive(Debug, Clone)]
pub struct PersistHandle {
    tx: mpsc::UnboundedSender<Uuid>,
}

impl PersistHandle {
    /// Queue a write of the collection's latest state.
    pub fn enqueue(&self, collection_id: Uuid) -> Result<()> {
        self.tx
            .send(collection_id)
            .map_err(|_| SessionError::QueueClosed)
    }
}

/// FIFO write queue with a single worker task.
#[derive(Debug)]
pub struct PersistQueue {
    handle: PersistHandle,
    worker: JoinHandle<()>,
}

impl PersistQueue {
    /// Spawn the worker on the current tokio runtime.
    pub fn spawn(
        store: Arc<dyn CollectionStore>,
        set: Arc<Mutex<CollectionSet>>,
        retry: RetryPolicy,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(run_worker(rx, store, set, retry));
        Self {
            handle: PersistHandle { tx },
            worker,
        }
    }

    pub fn handle(&self) -> PersistHandle {
        self.handle.clone()
    }

    /// Close the queue and wait for already-queued writes to finish.
    ///
    /// The worker keeps draining until every cloned handle is gone, so drop
    /// the sessions holding handles before awaiting this.
    pub async fn shutdown(self) {
        drop(self.handle);
        let _ = self.worker.await;
    }
}

async fn run_worker(
    mut rx: mpsc::UnboundedReceiver<Uuid>,
    store: Arc<dyn CollectionStore>,
    set: Arc<Mutex<CollectionSet>>,
    retry: RetryPolicy,
) {
    while let Some(collection_id) = rx.recv().await {
        persist_with_retry(collection_id, store.as_ref(), &set, &retry).await;
    }
    tracing::debug!("persistence queue drained");
}

async fn persist_with_retry(
    collection_id: Uuid,
    store: &dyn CollectionStore,
    set: &Mutex<CollectionSet>,
    retry: &RetryPolicy,
) {
    let attempts = retry.attempts.max(1);
    for attempt in 1..=attempts {
        // Snapshot the latest in-memory state, not one captured at enqueue
        // time. The lock is released before the await.
        let words = {
            let set = set.lock().expect("collection set lock");
            match set.snapshot(collection_id) {
                Ok(words) => words,
                Err(err) => {
                    tracing::warn!(%collection_id, %err, "skipping write for unknown collection");
                    return;
                }
            }
        };

        match store.persist(collection_id, words).await {
            Ok(()) => {
                tracing::debug!(%collection_id, attempt, "collection persisted");
                return;
            }
            Err(err) if attempt < attempts => {
                tracing::warn!(%collection_id, attempt, %err, "persist failed, will retry");
                tokio::time::sleep(retry.delay).await;
            }
            Err(err) => {
                tracing::error!(%collection_id, %err, "persist failed, dropping write");
            }
        }
    }
}
