//! In-memory working set of collections for a session.
//!
//! Sessions hold words by (collection id, index) into this set rather than
//! by detached copy, and every persistence write snapshots the latest state
//! held here. Remote storage stays the source of truth; this set is the one
//! in-memory view a session reads and writes.

use uuid::Uuid;

use crate::error::{RetentionError, Result};
use crate::types::{Collection, RetentionState, ReviewEntry, WordPair};

/// All collections a session operates over.
#[derive(Debug, Clone, Default)]
pub struct CollectionSet {
    collections: Vec<Collection>,
}

impl CollectionSet {
    pub fn new(collections: Vec<Collection>) -> Self {
        Self { collections }
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn get(&self, id: Uuid) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id == id)
    }

    /// Word lookup by owning collection and index.
    pub fn word(&self, collection_id: Uuid, index: usize) -> Result<&WordPair> {
        let collection = self
            .get(collection_id)
            .ok_or(RetentionError::UnknownCollection(collection_id))?;
        collection
            .words
            .get(index)
            .ok_or(RetentionError::WordIndexOutOfRange {
                collection: collection_id,
                index,
            })
    }

    /// Replace the retention state of one word.
    pub fn update_retention(
        &mut self,
        collection_id: Uuid,
        index: usize,
        retention: RetentionState,
    ) -> Result<()> {
        let collection = self
            .collections
            .iter_mut()
            .find(|c| c.id == collection_id)
            .ok_or(RetentionError::UnknownCollection(collection_id))?;
        let word = collection
            .words
            .get_mut(index)
            .ok_or(RetentionError::WordIndexOutOfRange {
                collection: collection_id,
                index,
            })?;
        word.retention = retention;
        Ok(())
    }

    /// Flatten every collection into review entries with owning handles.
    pub fn entries(&self) -> Vec<ReviewEntry> {
        self.collections
            .iter()
            .flat_map(|collection| {
                collection
                    .words
                    .iter()
                    .enumerate()
                    .map(move |(index, word)| ReviewEntry {
                        collection_id: collection.id,
                        index,
                        word: word.clone(),
                    })
            })
            .collect()
    }

    /// Snapshot a collection's words for a persistence write.
    pub fn snapshot(&self, collection_id: Uuid) -> Result<Vec<WordPair>> {
        self.get(collection_id)
            .map(|c| c.words.clone())
            .ok_or(RetentionError::UnknownCollection(collection_id))
    }
}
