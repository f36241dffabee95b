//! Memory-matching review session.
//!
//! Alternate front-end over the same review queue: every entry contributes
//! one matchable pair -- a front card showing the source text and a back
//! card showing the target text of the same word. Clearing the board
//! unlocks rating of each found word through the same rating sink as the
//! sequential session.
//!
//! Card lifecycle:
//!
//! ```text
//! FaceDown -> FaceUp -> Cleared     (match)
//! FaceDown -> FaceUp -> FaceDown    (mismatch, via resolve_pending)
//! ```
//!
//! The engine keeps a mismatched pair face-up until the caller's display
//! delay elapses and it calls [`MatchingSession::resolve_pending`]; flips in
//! between are ignored.

use rand::seq::SliceRandom;
use rand::Rng;
use vocab_core::{Rating, RetentionState, ReviewEntry, ReviewQueue};

use crate::error::{Result, SessionError};
use crate::rater::{RatingSink, SessionSummary};

/// Which side of the word a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    Front,
    Back,
}

/// Card lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    FaceDown,
    FaceUp,
    Cleared,
}

/// One physical card on the board.
#[derive(Debug, Clone)]
pub struct MatchCard {
    entry_index: usize,
    face: CardFace,
    state: CardState,
}

impl MatchCard {
    pub fn face(&self) -> CardFace {
        self.face
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    /// Index of the owning entry in the session's working set.
    pub fn entry_index(&self) -> usize {
        self.entry_index
    }
}

/// Outcome of a flip attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// First card of a pair turned face-up.
    Flipped,
    /// Flip ignored: card unavailable or a pair is pending.
    Ignored,
    /// Second card completed a match; both cards cleared.
    Matched,
    /// Second card mismatched; the pair stays up until `resolve_pending`.
    Mismatched,
}

pub struct MatchingSession<S: RatingSink> {
    entries: Vec<ReviewEntry>,
    cards: Vec<MatchCard>,
    face_up: Vec<usize>,
    /// Entry indices in discovery order (the found carousel).
    found: Vec<usize>,
    rated: Vec<bool>,
    sink: S,
    summary: SessionSummary,
}

impl<S: RatingSink> MatchingSession<S> {
    /// Build a shuffled board from the queue.
    pub fn new(queue: ReviewQueue, sink: S) -> Self {
        Self::with_rng(queue, sink, &mut rand::thread_rng())
    }

    /// Build with a caller-supplied RNG.
    pub fn with_rng(queue: ReviewQueue, sink: S, rng: &mut impl Rng) -> Self {
        let entries = queue.into_entries();
        let mut cards: Vec<MatchCard> = entries
            .iter()
            .enumerate()
            .flat_map(|(entry_index, _)| {
                [
                    MatchCard {
                        entry_index,
                        face: CardFace::Front,
                        state: CardState::FaceDown,
                    },
                    MatchCard {
                        entry_index,
                        face: CardFace::Back,
                        state: CardState::FaceDown,
                    },
                ]
            })
            .collect();
        cards.shuffle(rng);
        let rated = vec![false; entries.len()];
        Self {
            entries,
            cards,
            face_up: Vec::new(),
            found: Vec::new(),
            rated,
            sink,
            summary: SessionSummary::default(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn cards(&self) -> &[MatchCard] {
        &self.cards
    }

    /// Text a card shows when face-up.
    pub fn card_text(&self, card: usize) -> Option<&str> {
        let card = self.cards.get(card)?;
        let word = &self.entries[card.entry_index].word;
        Some(match card.face {
            CardFace::Front => &word.source,
            CardFace::Back => &word.target,
        })
    }

    /// A mismatched pair is waiting for the caller's display delay.
    pub fn has_pending_pair(&self) -> bool {
        self.face_up.len() == 2
    }

    /// Every card cleared; rating is unlocked.
    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(|c| c.state == CardState::Cleared)
    }

    /// Found words in discovery order.
    pub fn found(&self) -> Vec<&ReviewEntry> {
        self.found.iter().map(|&i| &self.entries[i]).collect()
    }

    pub fn rated_count(&self) -> usize {
        self.rated.iter().filter(|rated| **rated).count()
    }

    /// Every found word rated; the caller can check the due set for a
    /// follow-up session.
    pub fn all_rated(&self) -> bool {
        self.rated.iter().all(|rated| *rated)
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    // ── Events ───────────────────────────────────────────────────────

    /// Flip a card face-up.
    ///
    /// Ignored while a mismatched pair is pending and for cards already
    /// face-up or cleared, so flipping the same physical card twice can
    /// never produce a match.
    pub fn flip(&mut self, card: usize) -> Result<FlipOutcome> {
        if card >= self.cards.len() {
            return Err(SessionError::UnknownCard(card));
        }
        if self.has_pending_pair() || self.cards[card].state != CardState::FaceDown {
            return Ok(FlipOutcome::Ignored);
        }

        self.cards[card].state = CardState::FaceUp;
        self.face_up.push(card);
        if self.face_up.len() < 2 {
            return Ok(FlipOutcome::Flipped);
        }

        let (first, second) = (self.face_up[0], self.face_up[1]);
        if self.cards[first].entry_index == self.cards[second].entry_index {
            let entry_index = self.cards[first].entry_index;
            self.cards[first].state = CardState::Cleared;
            self.cards[second].state = CardState::Cleared;
            self.face_up.clear();
            self.found.push(entry_index);
            Ok(FlipOutcome::Matched)
        } else {
            Ok(FlipOutcome::Mismatched)
        }
    }

    /// Turn a mismatched pair back face-down once the display delay has
    /// elapsed. Returns whether a pair was pending.
    pub fn resolve_pending(&mut self) -> bool {
        if !self.has_pending_pair() {
            return false;
        }
        for card in self.face_up.drain(..) {
            self.cards[card].state = CardState::FaceDown;
        }
        true
    }

    /// Rate a found word, by carousel position, once the board is cleared.
    ///
    /// Each word can be rated at most once per session.
    pub fn rate_found(&mut self, position: usize, rating: Rating) -> Result<RetentionState> {
        if !self.is_complete() {
            return Err(SessionError::BoardNotCleared);
        }
        let entry_index = *self
            .found
            .get(position)
            .ok_or(SessionError::UnknownCard(position))?;
        if self.rated[entry_index] {
            return Err(SessionError::AlreadyRated);
        }
        let next = self.sink.rate(&self.entries[entry_index], rating)?;
        self.rated[entry_index] = true;
        self.summary.record(rating);
        Ok(next)
    }
}
