use super::CardStore;
use crate::error::Result;
use crate::model::Flashcard;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    cards: Vec<Flashcard>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CardStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Flashcard>> {
        Ok(self.cards.clone())
    }

    fn save(&mut self, cards: &[Flashcard]) -> Result<()> {
        self.cards = cards.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use chrono::{Duration, Utc};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_card(mut self, question: &str, answer: &str) -> Self {
            self.store
                .append_one(Flashcard::new(question.to_string(), answer.to_string()))
                .unwrap();
            self
        }

        pub fn with_stale_card(mut self, question: &str, answer: &str, days: i64) -> Self {
            let mut card = Flashcard::new(question.to_string(), answer.to_string());
            card.created_at = Utc::now() - Duration::days(days);
            card.last_used_at = card.created_at;
            self.store.append_one(card).unwrap();
            self
        }
    }
}
