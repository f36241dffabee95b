//! Core retention library shared by the review front-ends.
//!
//! Provides:
//! - The per-word retention model (bucket, state, word pair, collection)
//! - The rating transition scheduler
//! - Pool deduplication across collections
//! - Due-set selection and session queue building

pub mod dedupe;
pub mod error;
pub mod pool;
pub mod scheduler;
pub mod selector;
pub mod types;

pub use dedupe::{dedupe, dedupe_key};
pub use error::{RetentionError, Result};
pub use pool::CollectionSet;
pub use scheduler::Scheduler;
pub use selector::{
    build_queue, by_bucket, count_due, due_order, pool_stats, review_priority, select_due,
    PoolStats, DEFAULT_SESSION_LIMIT,
};
pub use types::{
    Bucket, Collection, Conjugation, PartOfSpeech, Rating, RetentionState, ReviewEntry,
    ReviewQueue, Tense, WordPair,
};
