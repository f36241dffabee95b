//! Shared fixtures for review-engine integration tests.

#![allow(dead_code)]

use chrono::{Duration, Utc};
use uuid::Uuid;
use vocab_core::{Bucket, Collection, RetentionState, WordPair};

/// A word in the given bucket, due `overdue` ago.
pub fn word_in_bucket(source: &str, target: &str, bucket: Bucket, overdue: Duration) -> WordPair {
    WordPair {
        id: Uuid::new_v4(),
        source: source.to_string(),
        target: target.to_string(),
        part_of_speech: None,
        explanation: None,
        example: None,
        conjugation: None,
        retention: RetentionState {
            bucket,
            next_review_at: Utc::now() - overdue,
            last_reviewed_at: None,
        },
    }
}

/// A freshly ingested word: `New` and immediately due.
pub fn new_word(source: &str, target: &str) -> WordPair {
    word_in_bucket(source, target, Bucket::New, Duration::zero())
}

pub fn collection(name: &str, words: Vec<WordPair>) -> Collection {
    Collection {
        id: Uuid::new_v4(),
        name: name.to_string(),
        list_id: None,
        words,
    }
}
