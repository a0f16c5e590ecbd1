use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Flashcard;
use crate::store::CardStore;

pub fn run<S: CardStore>(store: &mut S, question: String, answer: String) -> Result<CmdResult> {
    // Missing input aborts silently, no message.
    if question.trim().is_empty() || answer.trim().is_empty() {
        return Ok(CmdResult::default());
    }

    let card = Flashcard::new(question, answer);
    store.append_one(card.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Flashcard saved: {}",
        card.question
    )));
    result.affected_cards.push(card);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_card_to_store() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Q?".into(), "A".into()).unwrap();

        assert_eq!(result.affected_cards.len(), 1);
        let cards = store.load().unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question, "Q?");
        assert_eq!(cards[0].answer, "A");
    }

    #[test]
    fn appends_after_existing_cards() {
        let mut store = InMemoryStore::new();
        run(&mut store, "First?".into(), "one".into()).unwrap();
        run(&mut store, "Second?".into(), "two".into()).unwrap();

        let cards = store.load().unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].question, "Second?");
    }

    #[test]
    fn blank_question_aborts_silently() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "   ".into(), "A".into()).unwrap();

        assert!(result.messages.is_empty());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn blank_answer_aborts_silently() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Q?".into(), "".into()).unwrap();

        assert!(result.messages.is_empty());
        assert!(store.load().unwrap().is_empty());
    }
}
