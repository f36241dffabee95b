//! Error types for the review engine.

use thiserror::Error;
use vocab_core::RetentionError;

/// Result type alias using SessionError.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors raised by the review session state machines.
///
/// All of these are synchronous rejections of invalid input; nothing is
/// mutated when one is returned. Persistence failures never surface here --
/// they are retried by the write queue.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("rating requires the answer side to be revealed first")]
    NotRevealed,

    #[error("session is finished, no further ratings are accepted")]
    Finished,

    #[error("matching board is not cleared yet")]
    BoardNotCleared,

    #[error("word was already rated this session")]
    AlreadyRated,

    #[error("no card at index {0}")]
    UnknownCard(usize),

    #[error("persistence queue is closed")]
    QueueClosed,

    #[error(transparent)]
    Retention(#[from] RetentionError),
}
