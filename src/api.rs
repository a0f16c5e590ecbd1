//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for all
//! cardbox operations. It dispatches, it does not do business logic, I/O
//! or presentation — those live in `commands/*.rs` and the CLI.
//!
//! `CardboxApi<S: CardStore>` is generic over the storage backend:
//! production uses `FileStore`, tests use `InMemoryStore`.
//!
//! Every operation goes through the store fresh; nothing is cached between
//! calls, so each command is consistent with the file at the moment it runs.

use crate::commands;
use crate::error::Result;
use crate::lookup::TermLookup;
use crate::model::Flashcard;
use crate::store::CardStore;

pub struct CardboxApi<S: CardStore> {
    store: S,
}

impl<S: CardStore> CardboxApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_card(&mut self, question: String, answer: String) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, question, answer)
    }

    pub fn list_cards(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search_cards(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn edit_card(
        &mut self,
        target: &str,
        new_question: Option<String>,
        new_answer: Option<String>,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, target, new_question, new_answer)
    }

    pub fn delete_card(&mut self, target: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, target)
    }

    /// The deck sorted most-stale-first, for a new review session.
    pub fn review_queue(&self) -> Result<Vec<Flashcard>> {
        commands::review::queue(&self.store)
    }

    /// Persists a card the review session just revealed.
    pub fn record_reviewed(&mut self, card: &Flashcard) -> Result<commands::CmdResult> {
        commands::review::record_reviewed(&mut self.store, card)
    }

    pub fn lookup_term<L: TermLookup>(
        &self,
        service: &L,
        term: &str,
    ) -> Result<commands::CmdResult> {
        commands::lookup::run(service, term)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn add_then_search_dispatches_through_the_store() {
        let mut api = CardboxApi::new(InMemoryStore::new());
        api.add_card("What is Rust?".into(), "A language".into())
            .unwrap();

        let result = api.search_cards("rust").unwrap();
        assert_eq!(result.listed_cards.len(), 1);
    }

    #[test]
    fn edit_and_delete_share_question_identity() {
        let mut api = CardboxApi::new(InMemoryStore::new());
        api.add_card("Q?".into(), "A".into()).unwrap();

        api.edit_card("q?", None, Some("B".into())).unwrap();
        assert_eq!(api.list_cards().unwrap().listed_cards[0].answer, "B");

        api.delete_card(" Q? ").unwrap();
        assert!(api.list_cards().unwrap().listed_cards.is_empty());
    }
}
