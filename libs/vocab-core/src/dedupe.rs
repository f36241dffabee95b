//! Pool deduplication across collections.
//!
//! The same word imported into several collections reviews as a single
//! entry; the most advanced retention state wins, so a word mastered in one
//! collection is never re-learned from scratch in another.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::types::{ReviewEntry, WordPair};

/// Case-insensitive identity of a word pair, independent of collection.
pub fn dedupe_key(word: &WordPair) -> (String, String) {
    (
        word.source.trim().to_lowercase(),
        word.target.trim().to_lowercase(),
    )
}

/// Collapse duplicates to one entry per (source, target) key.
///
/// Keeps the duplicate with the highest bucket rank; ties keep the first
/// encountered. Order-independent fold, idempotent, persists nothing.
pub fn dedupe(entries: Vec<ReviewEntry>) -> Vec<ReviewEntry> {
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut kept: Vec<ReviewEntry> = Vec::with_capacity(entries.len());

    for entry in entries {
        match index.entry(dedupe_key(&entry.word)) {
            Entry::Occupied(slot) => {
                let held = &mut kept[*slot.get()];
                if entry.word.retention.bucket.rank() > held.word.retention.bucket.rank() {
                    *held = entry;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(kept.len());
                kept.push(entry);
            }
        }
    }

    kept
}
