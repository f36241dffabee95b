//! Error types for vocab-core.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias using RetentionError.
pub type Result<T> = std::result::Result<T, RetentionError>;

/// Errors from collection-set lookups.
#[derive(Debug, Error)]
pub enum RetentionError {
    #[error("unknown collection {0}")]
    UnknownCollection(Uuid),

    #[error("no word at index {index} in collection {collection}")]
    WordIndexOutOfRange { collection: Uuid, index: usize },
}
