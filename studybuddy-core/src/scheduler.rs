//! Fixed-interval flashcard scheduling.
//!
//! SM-2 in name only: the interval is a per-difficulty constant and
//! never grows with review outcomes. `review_count` is stored but
//! nothing here increments it.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{Difficulty, Flashcard};

/// Materializes a review record for a freshly answered question.
/// `next_review_at` is always `now + interval(difficulty)`.
pub fn new_card(
    question: impl Into<String>,
    answer: impl Into<String>,
    difficulty: Difficulty,
    now: DateTime<Utc>,
) -> Flashcard {
    Flashcard {
        id: Uuid::new_v4(),
        question: question.into(),
        answer: answer.into(),
        difficulty,
        created_at: now,
        interval_days: difficulty.interval_days(),
        next_review_at: now + difficulty.interval(),
        review_count: 0,
    }
}

/// Cards whose `next_review_at` is at or before `now`, in the stored
/// (insertion) order. Pure filter; the input is never mutated.
pub fn due_cards(cards: &[Flashcard], now: DateTime<Utc>) -> Vec<Flashcard> {
    cards.iter().filter(|c| c.is_due(now)).cloned().collect()
}
