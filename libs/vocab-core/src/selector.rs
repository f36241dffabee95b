//! Due-set selection and prioritization.
//!
//! "Due" is computed lazily against wall-clock time whenever a session is
//! started; there is no background scheduling daemon.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dedupe::dedupe;
use crate::pool::CollectionSet;
use crate::types::{Bucket, RetentionState, ReviewQueue, WordPair};

/// Cap on entries per session in the default session trigger.
pub const DEFAULT_SESSION_LIMIT: usize = 50;

/// Selection priority of a bucket; lower reviews first.
///
/// Words at higher risk of being forgotten surface first, but `New` words
/// interleave ahead of `Easy` so first exposure is not starved by a review
/// backlog.
pub fn review_priority(bucket: Bucket) -> u8 {
    match bucket {
        Bucket::Hard => 0,
        Bucket::Medium => 1,
        Bucket::New => 2,
        Bucket::Easy => 3,
    }
}

/// Review order: bucket priority first, longest-overdue first within it.
pub fn due_order(a: &RetentionState, b: &RetentionState) -> Ordering {
    review_priority(a.bucket)
        .cmp(&review_priority(b.bucket))
        .then_with(|| a.next_review_at.cmp(&b.next_review_at))
}

/// Number of words due for review right now.
pub fn count_due(pool: &[WordPair], now: DateTime<Utc>) -> usize {
    pool.iter().filter(|w| w.retention.is_due(now)).count()
}

/// Prioritized due words, at most `limit`.
pub fn select_due(pool: &[WordPair], limit: usize, now: DateTime<Utc>) -> Vec<WordPair> {
    let mut due: Vec<WordPair> = pool
        .iter()
        .filter(|w| w.retention.is_due(now))
        .cloned()
        .collect();
    due.sort_by(|a, b| due_order(&a.retention, &b.retention));
    due.truncate(limit);
    due
}

/// Full membership of one bucket, review-ordered, ignoring the due gate.
///
/// Backs the manual "drill this bucket" override.
pub fn by_bucket(pool: &[WordPair], bucket: Bucket) -> Vec<WordPair> {
    let mut members: Vec<WordPair> = pool
        .iter()
        .filter(|w| w.retention.bucket == bucket)
        .cloned()
        .collect();
    members.sort_by(|a, b| due_order(&a.retention, &b.retention));
    members
}

/// Pool counts for list and overview screens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStats {
    pub total: usize,
    pub due: usize,
    pub new: usize,
    pub hard: usize,
    pub medium: usize,
    pub easy: usize,
}

pub fn pool_stats(pool: &[WordPair], now: DateTime<Utc>) -> PoolStats {
    let mut stats = PoolStats {
        total: pool.len(),
        ..PoolStats::default()
    };
    for word in pool {
        if word.retention.is_due(now) {
            stats.due += 1;
        }
        match word.retention.bucket {
            Bucket::New => stats.new += 1,
            Bucket::Hard => stats.hard += 1,
            Bucket::Medium => stats.medium += 1,
            Bucket::Easy => stats.easy += 1,
        }
    }
    stats
}

/// Build the queue for one review session.
///
/// Flattens the set into entries, collapses cross-collection duplicates,
/// keeps what is due now, orders by review priority, and truncates to
/// `limit`.
pub fn build_queue(set: &CollectionSet, limit: usize, now: DateTime<Utc>) -> ReviewQueue {
    let mut entries: Vec<_> = dedupe(set.entries())
        .into_iter()
        .filter(|e| e.word.retention.is_due(now))
        .collect();
    entries.sort_by(|a, b| due_order(&a.word.retention, &b.word.retention));
    entries.truncate(limit);
    ReviewQueue::new(entries)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    use super::*;
    use crate::types::Collection;

    fn word_due(source: &str, bucket: Bucket, overdue: Duration, now: DateTime<Utc>) -> WordPair {
        WordPair {
            id: Uuid::new_v4(),
            source: source.to_string(),
            target: format!("{source}-de"),
            part_of_speech: None,
            explanation: None,
            example: None,
            conjugation: None,
            retention: RetentionState {
                bucket,
                next_review_at: now - overdue,
                last_reviewed_at: None,
            },
        }
    }

    fn word_not_due(source: &str, bucket: Bucket, now: DateTime<Utc>) -> WordPair {
        WordPair {
            retention: RetentionState {
                bucket,
                next_review_at: now + Duration::days(5),
                last_reviewed_at: Some(now),
            },
            ..word_due(source, bucket, Duration::zero(), now)
        }
    }

    #[test]
    fn select_due_skips_words_scheduled_for_later() {
        let now = Utc::now();
        let pool = vec![
            word_due("uno", Bucket::Medium, Duration::hours(1), now),
            word_not_due("dos", Bucket::Medium, now),
            word_not_due("tres", Bucket::Easy, now),
        ];
        let selected = select_due(&pool, 10, now);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].source, "uno");
        assert_eq!(count_due(&pool, now), 1);
    }

    #[test]
    fn select_due_honors_the_limit() {
        let now = Utc::now();
        let pool: Vec<WordPair> = (0..8)
            .map(|i| word_due(&format!("w{i}"), Bucket::New, Duration::zero(), now))
            .collect();
        assert_eq!(select_due(&pool, 3, now).len(), 3);
        // Fewer due than the limit: all of them come back.
        assert_eq!(select_due(&pool, 20, now).len(), 8);
    }

    #[test]
    fn hard_then_medium_then_new_then_easy() {
        let now = Utc::now();
        let pool = vec![
            word_due("easy", Bucket::Easy, Duration::hours(1), now),
            word_due("new", Bucket::New, Duration::zero(), now),
            word_due("medium", Bucket::Medium, Duration::hours(1), now),
            word_due("hard", Bucket::Hard, Duration::hours(1), now),
        ];
        let order: Vec<_> = select_due(&pool, 10, now)
            .into_iter()
            .map(|w| w.source)
            .collect();
        assert_eq!(order, vec!["hard", "medium", "new", "easy"]);
    }

    #[test]
    fn longest_overdue_first_within_a_bucket() {
        let now = Utc::now();
        let pool = vec![
            word_due("fresh", Bucket::Hard, Duration::minutes(5), now),
            word_due("stale", Bucket::Hard, Duration::days(2), now),
        ];
        let order: Vec<_> = select_due(&pool, 10, now)
            .into_iter()
            .map(|w| w.source)
            .collect();
        assert_eq!(order, vec!["stale", "fresh"]);
    }

    #[test]
    fn by_bucket_ignores_the_due_gate() {
        let now = Utc::now();
        let pool = vec![
            word_due("due", Bucket::Medium, Duration::hours(1), now),
            word_not_due("later", Bucket::Medium, now),
            word_due("other", Bucket::Hard, Duration::hours(1), now),
        ];
        let members = by_bucket(&pool, Bucket::Medium);
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].source, "due");
        assert_eq!(members[1].source, "later");
    }

    #[test]
    fn pool_stats_count_per_bucket_and_due() {
        let now = Utc::now();
        let pool = vec![
            word_due("a", Bucket::New, Duration::zero(), now),
            word_due("b", Bucket::Hard, Duration::hours(1), now),
            word_not_due("c", Bucket::Easy, now),
        ];
        let stats = pool_stats(&pool, now);
        assert_eq!(
            stats,
            PoolStats {
                total: 3,
                due: 2,
                new: 1,
                hard: 1,
                medium: 0,
                easy: 1,
            }
        );
    }

    #[test]
    fn build_queue_dedupes_across_collections() {
        let now = Utc::now();
        let shared_new = word_due("casa", Bucket::New, Duration::zero(), now);
        let shared_medium = word_due("casa", Bucket::Medium, Duration::hours(1), now);

        let a = Collection {
            id: Uuid::new_v4(),
            name: "a".to_string(),
            list_id: None,
            words: vec![shared_medium],
        };
        let b = Collection {
            id: Uuid::new_v4(),
            name: "b".to_string(),
            list_id: None,
            words: vec![shared_new, word_due("gato", Bucket::New, Duration::zero(), now)],
        };
        let a_id = a.id;
        let set = CollectionSet::new(vec![a, b]);

        let queue = build_queue(&set, DEFAULT_SESSION_LIMIT, now);
        assert_eq!(queue.len(), 2);
        // The mastered copy wins and reviews ahead of the new word.
        assert_eq!(queue.entries()[0].collection_id, a_id);
        assert_eq!(queue.entries()[0].word.retention.bucket, Bucket::Medium);
        assert_eq!(queue.entries()[1].word.source, "gato");
    }

    #[test]
    fn build_queue_truncates_to_limit() {
        let now = Utc::now();
        let words: Vec<WordPair> = (0..6)
            .map(|i| word_due(&format!("w{i}"), Bucket::New, Duration::zero(), now))
            .collect();
        let set = CollectionSet::new(vec![Collection {
            id: Uuid::new_v4(),
            name: "big".to_string(),
            list_id: None,
            words,
        }]);
        assert_eq!(build_queue(&set, 4, now).len(), 4);
    }
}
