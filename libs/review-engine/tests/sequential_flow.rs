//! End-to-end sequential review flow.

mod common;

use std::sync::{Arc, Mutex};

use chrono::Utc;
use pretty_assertions::assert_eq;
use review_engine::{
    MemoryStore, PersistQueue, RetryPolicy, SequentialSession, SessionRater,
};
use vocab_core::{build_queue, count_due, Bucket, CollectionSet, Rating, Scheduler};

#[tokio::test]
async fn three_new_words_rated_easy_empty_the_due_set() {
    let now = Utc::now();
    let collection = common::collection(
        "basics",
        vec![
            common::new_word("casa", "Haus"),
            common::new_word("gato", "Katze"),
            common::new_word("perro", "Hund"),
        ],
    );
    let collection_id = collection.id;
    let set = Arc::new(Mutex::new(CollectionSet::new(vec![collection])));
    let store = Arc::new(MemoryStore::new());

    let queue = {
        let set = set.lock().unwrap();
        build_queue(&set, 10, now)
    };
    assert_eq!(queue.len(), 3);

    let persist = PersistQueue::spawn(store.clone(), set.clone(), RetryPolicy::default());
    let rater = SessionRater::new(set.clone(), Scheduler::default(), persist.handle());
    let mut session = SequentialSession::new(queue, rater);

    while !session.is_done() {
        session.reveal();
        session.rate(Rating::Easy).unwrap();
    }
    assert_eq!(session.summary().reviewed, 3);

    // The due set empties immediately against in-memory state.
    {
        let set = set.lock().unwrap();
        let words = &set.get(collection_id).unwrap().words;
        assert_eq!(count_due(words, Utc::now()), 0);
        assert!(words.iter().all(|w| w.retention.bucket == Bucket::Easy));
    }

    drop(session);
    persist.shutdown().await;

    // One serialized write per rating, each carrying the state that was
    // current when it was written.
    assert_eq!(store.write_log(), vec![collection_id; 3]);
    let saved = store.saved(collection_id).unwrap();
    assert!(saved.iter().all(|w| w.retention.bucket == Bucket::Easy));
}

#[tokio::test]
async fn session_queue_deduplicates_across_collections() {
    let now = Utc::now();
    // "casa/Haus" lives in two collections; the mastered copy wins.
    let a = common::collection(
        "unit one",
        vec![common::word_in_bucket(
            "casa",
            "Haus",
            Bucket::Medium,
            chrono::Duration::hours(2),
        )],
    );
    let b = common::collection("starter pack", vec![common::new_word("casa", "Haus")]);
    let a_id = a.id;
    let set = Arc::new(Mutex::new(CollectionSet::new(vec![a, b])));
    let store = Arc::new(MemoryStore::new());

    let queue = {
        let set = set.lock().unwrap();
        build_queue(&set, 10, now)
    };
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.entries()[0].collection_id, a_id);
    assert_eq!(queue.entries()[0].word.retention.bucket, Bucket::Medium);

    let persist = PersistQueue::spawn(store.clone(), set.clone(), RetryPolicy::default());
    let rater = SessionRater::new(set.clone(), Scheduler::default(), persist.handle());
    let mut session = SequentialSession::new(queue, rater);
    session.reveal();
    session.rate(Rating::Easy).unwrap();

    drop(session);
    persist.shutdown().await;

    // Only the owning collection is persisted.
    assert_eq!(store.write_log(), vec![a_id]);
    assert_eq!(
        store.saved(a_id).unwrap()[0].retention.bucket,
        Bucket::Easy
    );
}
