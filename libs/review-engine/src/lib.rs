//! Review session engine for the vocabulary trainer.
//!
//! Two front-ends over one queue and one rating contract:
//! - Sequential flashcard review
//! - Memory-matching minigame
//!
//! Ratings flow through a shared [`RatingSink`] into the retention
//! scheduler; persistence writes are serialized through a FIFO queue that
//! snapshots the latest in-memory collection state at write time.

pub mod error;
pub mod matching;
pub mod rater;
pub mod sequential;
pub mod store;
pub mod writer;

pub use error::{Result, SessionError};
pub use matching::{CardFace, CardState, FlipOutcome, MatchCard, MatchingSession};
pub use rater::{RatingSink, SessionRater, SessionSummary};
pub use sequential::SequentialSession;
pub use store::{CollectionStore, MemoryStore};
pub use writer::{PersistHandle, PersistQueue, RetryPolicy};
