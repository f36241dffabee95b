//! Core types for the vocabulary trainer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Retention-confidence bucket for a learned word.
///
/// Ordinal: `New < Hard < Medium < Easy`, increasing confidence. The bucket
/// is re-derived by the scheduler on every rating and never edited elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    New,
    Hard,
    Medium,
    Easy,
}

impl Default for Bucket {
    fn default() -> Self {
        Self::New
    }
}

impl Bucket {
    /// Ordinal rank (0-3), increasing with retention confidence.
    pub fn rank(self) -> u8 {
        match self {
            Self::New => 0,
            Self::Hard => 1,
            Self::Medium => 2,
            Self::Easy => 3,
        }
    }
}

/// Rating for a reviewed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Hard,
    Medium,
    Easy,
}

impl Rating {
    /// Convert to 3-point numeric value (1-3).
    pub fn to_value(self) -> u8 {
        match self {
            Self::Hard => 1,
            Self::Medium => 2,
            Self::Easy => 3,
        }
    }

    /// Create from 3-point numeric value.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Hard),
            2 => Some(Self::Medium),
            3 => Some(Self::Easy),
            _ => None,
        }
    }
}

/// Part-of-speech tag attached by content ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Verb,
    Noun,
    #[serde(rename = "adj")]
    Adjective,
    Other,
}

/// One conjugated tense of a verb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tense {
    pub name: String,
    /// Forms in person order (yo, tú, ... / ich, du, ...).
    pub forms: Vec<String>,
}

/// Structured conjugation data for a verb pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conjugation {
    pub infinitive: String,
    pub tenses: Vec<Tense>,
}

/// Per-word scheduling record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetentionState {
    pub bucket: Bucket,
    pub next_review_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed_at: Option<DateTime<Utc>>,
}

impl RetentionState {
    /// Whether the word should be reviewed now.
    ///
    /// A `New` word is always due regardless of `next_review_at`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.bucket == Bucket::New || now >= self.next_review_at
    }
}

/// A learnable unit: source-language text paired with its translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordPair {
    pub id: Uuid,
    pub source: String,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<PartOfSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conjugation: Option<Conjugation>,
    pub retention: RetentionState,
}

/// A named, persisted group of word pairs ("world" in the product UI).
///
/// The unit of persistence. The core never mutates membership, only the
/// retention states of pairs within.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_id: Option<Uuid>,
    pub words: Vec<WordPair>,
}

/// Ties a word back to its owning collection and index, so the right
/// collection can be persisted after a rating.
///
/// The embedded word is a display snapshot; scheduling updates go through
/// the (collection id, index) handle. Created when a session is built and
/// discarded when it ends.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewEntry {
    pub collection_id: Uuid,
    pub index: usize,
    pub word: WordPair,
}

/// Ordered, finite sequence of entries for one review session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewQueue {
    entries: Vec<ReviewEntry>,
}

impl ReviewQueue {
    pub fn new(entries: Vec<ReviewEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ReviewEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<ReviewEntry> {
        self.entries
    }
}
