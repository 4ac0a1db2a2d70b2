use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use uuid::Uuid;

use crate::CoreError;

pub type CardId = Uuid;

/// Most recent questions kept in the ask history.
pub const HISTORY_CAP: usize = 20;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Fixed review interval per label. There is no review-outcome
    /// feedback loop; the interval never changes after creation.
    pub fn interval_days(&self) -> f64 {
        match self {
            Difficulty::Easy => 3.0,
            Difficulty::Medium => 1.0,
            Difficulty::Hard => 0.5,
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::seconds((self.interval_days() * 86_400.0) as i64)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(CoreError::InvalidDifficulty(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: CardId,
    pub question: String,
    pub answer: String,
    pub difficulty: Difficulty,
    pub created_at: DateTime<Utc>,
    pub interval_days: f64,
    pub next_review_at: DateTime<Utc>,
    pub review_count: u32,
}

impl Flashcard {
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review_at <= now
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub question: String,
    pub asked_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(question: impl Into<String>, asked_at: DateTime<Utc>) -> Self {
        Self {
            question: question.into(),
            asked_at,
        }
    }
}

/// Process-wide study state with a daily-reset lifecycle, keyed by an
/// opaque installation id. Passed explicitly to whatever needs it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionState {
    pub install_id: String,
    pub day: NaiveDate,
    pub solves_today: u32,
    pub streak_days: u32,
    pub questions_per_day: BTreeMap<NaiveDate, u32>,
}

impl SessionState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            install_id: Uuid::new_v4().to_string(),
            day: today,
            solves_today: 0,
            streak_days: 0,
            questions_per_day: BTreeMap::new(),
        }
    }
}
