use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// How overdue a card is, derived from the days since it was last reviewed.
///
/// Never stored; recomputed on demand so it always reflects the current
/// staleness of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn from_stale_days(days: i64) -> Self {
        if days >= 10 {
            Priority::High
        } else if days >= 5 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    /// Reveal delay during review, in delay units (seconds by default).
    pub fn delay_units(&self) -> u64 {
        match self {
            Priority::High => 10,
            Priority::Medium => 5,
            Priority::Low => 3,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

/// A question/answer pair with review bookkeeping.
///
/// The serialized field names match the legacy storage format
/// (`flashcard_question`, `flashcard_answer`, `last_used`, `date_created`).
/// The `id` is new; files written before it existed load fine because it
/// defaults to a fresh v4 on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(rename = "flashcard_question")]
    pub question: String,
    #[serde(rename = "flashcard_answer")]
    pub answer: String,
    #[serde(rename = "date_created")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "last_used")]
    pub last_used_at: DateTime<Utc>,
}

impl Flashcard {
    pub fn new(question: String, answer: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            question,
            answer,
            created_at: now,
            last_used_at: now,
        }
    }

    /// Whole days since the card was last shown during review.
    pub fn stale_days_at(&self, now: DateTime<Utc>) -> i64 {
        (now - self.last_used_at).num_days()
    }

    pub fn priority_at(&self, now: DateTime<Utc>) -> Priority {
        Priority::from_stale_days(self.stale_days_at(now))
    }

    pub fn priority(&self) -> Priority {
        self.priority_at(Utc::now())
    }

    /// Resets the staleness clock. The only mutation review performs;
    /// `last_used_at` only ever advances, keeping it >= `created_at`.
    pub fn mark_used(&mut self) {
        self.last_used_at = Utc::now();
    }

    /// Text identity used by edit/delete: trimmed, case-insensitive
    /// question equality. Duplicate questions are indistinguishable here;
    /// callers flag collisions and act on the first match.
    pub fn matches_question(&self, target: &str) -> bool {
        question_key(&self.question) == question_key(target)
    }
}

pub fn question_key(s: &str) -> String {
    s.trim().to_lowercase()
}
