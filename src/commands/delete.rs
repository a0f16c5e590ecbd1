use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CardStore;

use super::helpers::find_by_question;

/// Deletes the first card whose question matches `target` (trimmed,
/// case-insensitive). No match is a no-op, reported as such.
pub fn run<S: CardStore>(store: &mut S, target: &str) -> Result<CmdResult> {
    let mut cards = store.load()?;
    let found = find_by_question(&cards, target);

    let mut result = CmdResult::default();
    let Some(i) = found.first else {
        result.add_message(CmdMessage::warning(
            "No flashcard with that question found.",
        ));
        return Ok(result);
    };
    if found.count > 1 {
        result.add_message(CmdMessage::warning(format!(
            "{} flashcards share this question; deleting the first match.",
            found.count
        )));
    }

    let removed = cards.remove(i);
    store.save(&cards)?;

    result.add_message(CmdMessage::success(format!(
        "Flashcard deleted: {}",
        removed.question
    )));
    result.affected_cards.push(removed);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn deletes_matching_card() {
        let mut fixture = StoreFixture::new()
            .with_card("Keep?", "yes")
            .with_card("Drop?", "no");

        run(&mut fixture.store, " DROP? ").unwrap();

        let cards = fixture.store.load().unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question, "Keep?");
    }

    #[test]
    fn deletes_only_first_of_duplicates() {
        let mut fixture = StoreFixture::new()
            .with_card("Dup?", "first")
            .with_card("Dup?", "second");

        let result = run(&mut fixture.store, "dup?").unwrap();
        assert!(result.messages[0].content.contains("2 flashcards"));

        let cards = fixture.store.load().unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].answer, "second");
    }

    #[test]
    fn not_found_is_a_noop() {
        let mut fixture = StoreFixture::new().with_card("Q?", "A");
        let result = run(&mut fixture.store, "missing").unwrap();

        assert!(result.affected_cards.is_empty());
        assert_eq!(fixture.store.load().unwrap().len(), 1);
    }
}
