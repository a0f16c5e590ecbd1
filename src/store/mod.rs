//! # Storage Layer
//!
//! The [`CardStore`] trait abstracts persistence so the command layer can be
//! tested without a filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage. The whole deck lives in one JSON
//!   array file, rewritten in full on every save (write-temp-then-rename so a
//!   crash never leaves a truncated file).
//! - [`memory::InMemoryStore`]: in-memory storage for tests. No persistence.
//!
//! ## Storage Format
//!
//! ```text
//! storage.json    # JSON array, one object per flashcard
//! ```
//!
//! Each element carries `flashcard_question`, `flashcard_answer`,
//! `last_used`, `date_created` (RFC 3339 text) and `id`. A missing file is
//! an empty deck; a file that fails to decode is treated as empty with a
//! logged warning rather than an error, so a corrupt store never takes the
//! session down.
//!
//! There is no locking. Concurrent writers are out of scope; every operation
//! reloads from disk before acting.

use crate::error::Result;
use crate::model::Flashcard;

pub mod fs;
pub mod memory;

/// Abstract interface for flashcard persistence.
pub trait CardStore {
    /// Load the full deck. Absent backing file means an empty deck.
    fn load(&self) -> Result<Vec<Flashcard>>;

    /// Persist the full deck, replacing whatever was stored before.
    fn save(&mut self, cards: &[Flashcard]) -> Result<()>;

    /// Append a single card to the stored deck.
    fn append_one(&mut self, card: Flashcard) -> Result<()> {
        let mut cards = self.load()?;
        cards.push(card);
        self.save(&cards)
    }
}
