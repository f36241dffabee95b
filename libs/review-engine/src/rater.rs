//! The shared rating contract behind both review front-ends.
//!
//! The sequential session and the matching minigame submit ratings through
//! the same sink, so transition, arena update, and persistence enqueue live
//! in exactly one place.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use vocab_core::{CollectionSet, Rating, RetentionState, ReviewEntry, Scheduler};

use crate::error::Result;
use crate::writer::PersistHandle;

/// Rating capability both session types call identically.
pub trait RatingSink {
    /// Apply a rating to the entry's word and queue persistence of its
    /// owning collection.
    fn rate(&mut self, entry: &ReviewEntry, rating: Rating) -> Result<RetentionState>;
}

/// Counts for the end-of-session screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub reviewed: usize,
    pub hard: usize,
    pub medium: usize,
    pub easy: usize,
}

impl SessionSummary {
    pub(crate) fn record(&mut self, rating: Rating) {
        self.reviewed += 1;
        match rating {
            Rating::Hard => self.hard += 1,
            Rating::Medium => self.medium += 1,
            Rating::Easy => self.easy += 1,
        }
    }
}

/// Production sink: scheduler transition against the shared collection set,
/// then one queued write for the owning collection.
pub struct SessionRater {
    set: Arc<Mutex<CollectionSet>>,
    scheduler: Scheduler,
    persist: PersistHandle,
}

impl SessionRater {
    pub fn new(
        set: Arc<Mutex<CollectionSet>>,
        scheduler: Scheduler,
        persist: PersistHandle,
    ) -> Self {
        Self {
            set,
            scheduler,
            persist,
        }
    }
}

impl RatingSink for SessionRater {
    fn rate(&mut self, entry: &ReviewEntry, rating: Rating) -> Result<RetentionState> {
        let now = Utc::now();
        let next = {
            let mut set = self.set.lock().expect("collection set lock");
            let current = set.word(entry.collection_id, entry.index)?.retention.clone();
            let next = self.scheduler.transition(&current, rating, now);
            set.update_retention(entry.collection_id, entry.index, next.clone())?;
            next
        };
        tracing::debug!(word = %entry.word.source, ?rating, bucket = ?next.bucket, "word rated");
        self.persist.enqueue(entry.collection_id)?;
        Ok(next)
    }
}
