//! Persistence seam between sessions and the caller's storage.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;
use vocab_core::WordPair;

/// Write operation the caller provides.
///
/// Remote storage stays the source of truth; the engine only pushes the
/// latest in-memory state of one collection at a time through this seam.
/// Implementations must be idempotent under retry.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    async fn persist(&self, collection_id: Uuid, words: Vec<WordPair>) -> anyhow::Result<()>;
}

#[derive(Debug, Default)]
struct MemoryStoreInner {
    saved: HashMap<Uuid, Vec<WordPair>>,
    writes: Vec<Uuid>,
}

/// In-memory store recording every write, for tests and embedding callers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryStoreInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last persisted words for a collection.
    pub fn saved(&self, collection_id: Uuid) -> Option<Vec<WordPair>> {
        self.inner
            .lock()
            .expect("memory store lock")
            .saved
            .get(&collection_id)
            .cloned()
    }

    /// Collection ids in write order.
    pub fn write_log(&self) -> Vec<Uuid> {
        self.inner.lock().expect("memory store lock").writes.clone()
    }
}

#[async_trait]
impl CollectionStore for MemoryStore {
    async fn persist(&self, collection_id: Uuid, words: Vec<WordPair>) -> anyhow::Result<()> {
        let mut inner = self.inner.lock().expect("memory store lock");
        inner.writes.push(collection_id);
        inner.saved.insert(collection_id, words);
        Ok(())
    }
}
