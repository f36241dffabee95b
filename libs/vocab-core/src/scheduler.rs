//! Retention scheduling: the rating transition function.
//!
//! Buckets form an ordinal ladder `New < Hard < Medium < Easy`. A rating
//! re-derives the bucket and pushes `next_review_at` forward by the bucket's
//! interval; nothing else mutates retention state.

use chrono::{DateTime, Duration, Utc};

use crate::types::{Bucket, Rating, RetentionState};

/// Bucket scheduler with tunable intervals.
///
/// Intervals must be strictly increasing in bucket rank; the exact constants
/// are a tuning parameter.
#[derive(Debug, Clone)]
pub struct Scheduler {
    /// Re-exposure delay after landing in `Hard` (same-session or same-day).
    pub hard_interval: Duration,
    pub medium_interval: Duration,
    pub easy_interval: Duration,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self {
            hard_interval: Duration::minutes(10),
            medium_interval: Duration::days(3),
            easy_interval: Duration::days(14),
        }
    }
}

impl Scheduler {
    /// State for a freshly ingested word: `New` and immediately due.
    pub fn initial_state(&self, now: DateTime<Utc>) -> RetentionState {
        RetentionState {
            bucket: Bucket::New,
            next_review_at: now,
            last_reviewed_at: None,
        }
    }

    /// Interval until the next review for a word that landed in `bucket`.
    pub fn interval(&self, bucket: Bucket) -> Duration {
        match bucket {
            Bucket::New => Duration::zero(),
            Bucket::Hard => self.hard_interval,
            Bucket::Medium => self.medium_interval,
            Bucket::Easy => self.easy_interval,
        }
    }

    /// Apply a rating to a retention state.
    ///
    /// Pure and total: every input produces a defined output, no side
    /// effects, no failure mode.
    pub fn transition(
        &self,
        state: &RetentionState,
        rating: Rating,
        now: DateTime<Utc>,
    ) -> RetentionState {
        let bucket = next_bucket(state.bucket, rating);
        RetentionState {
            bucket,
            next_review_at: now + self.interval(bucket),
            last_reviewed_at: Some(now),
        }
    }
}

/// Bucket re-derivation for a rating.
///
/// `Hard` pins the word to `Hard`, `Easy` to `Easy`; `Medium` climbs one
/// step toward `Easy` but never past `Medium`.
fn next_bucket(current: Bucket, rating: Rating) -> Bucket {
    match rating {
        Rating::Hard => Bucket::Hard,
        Rating::Easy => Bucket::Easy,
        Rating::Medium => match current {
            Bucket::New => Bucket::Hard,
            Bucket::Hard | Bucket::Medium | Bucket::Easy => Bucket::Medium,
        },
    }
}
