//! Sequential flashcard review session.
//!
//! ```text
//! Showing(front) -> reveal -> Showing(back) -> rate -> Showing(next) | Done
//! ```
//!
//! Caller-driven state machine, no internal threads or timers. Rating while
//! the answer is hidden is rejected with nothing mutated; rating while
//! revealed applies the scheduler through the shared rating sink, queues one
//! persistence write for the owning collection, and advances the queue.

use std::collections::VecDeque;

use vocab_core::{Rating, RetentionState, ReviewEntry, ReviewQueue};

use crate::error::{Result, SessionError};
use crate::rater::{RatingSink, SessionSummary};

pub struct SequentialSession<S: RatingSink> {
    queue: VecDeque<ReviewEntry>,
    sink: S,
    revealed: bool,
    summary: SessionSummary,
}

impl<S: RatingSink> SequentialSession<S> {
    /// Start a session over the queue.
    ///
    /// An empty queue is a session that is done immediately, not an error.
    pub fn new(queue: ReviewQueue, sink: S) -> Self {
        Self {
            queue: queue.into_entries().into(),
            sink,
            revealed: false,
            summary: SessionSummary::default(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Entry currently shown, front face first.
    pub fn current(&self) -> Option<&ReviewEntry> {
        self.queue.front()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_done(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    // ── Events ───────────────────────────────────────────────────────

    /// Show the answer side. Idempotent; no effect on scheduling.
    pub fn reveal(&mut self) {
        if !self.queue.is_empty() {
            self.revealed = true;
        }
    }

    /// Rate the current word and advance to the next one.
    ///
    /// Requires the answer to have been revealed.
    pub fn rate(&mut self, rating: Rating) -> Result<RetentionState> {
        let entry = self.queue.front().ok_or(SessionError::Finished)?;
        if !self.revealed {
            return Err(SessionError::NotRevealed);
        }
        let next = self.sink.rate(entry, rating)?;
        self.queue.pop_front();
        self.revealed = false;
        self.summary.record(rating);
        Ok(next)
    }
}
