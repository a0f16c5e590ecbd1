use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CardStore;

use super::helpers::{find_by_question, non_blank};

/// Edits the first card whose question matches `target` (trimmed,
/// case-insensitive). Blank new values keep the current field.
pub fn run<S: CardStore>(
    store: &mut S,
    target: &str,
    new_question: Option<String>,
    new_answer: Option<String>,
) -> Result<CmdResult> {
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
            "{} flashcards share this question; editing the first match.",
            found.count
        )));
    }

    if let Some(question) = non_blank(new_question) {
        cards[i].question = question;
    }
    if let Some(answer) = non_blank(new_answer) {
        cards[i].answer = answer;
    }
    let edited = cards[i].clone();
    store.save(&cards)?;

    result.add_message(CmdMessage::success(format!(
        "Flashcard updated: {}",
        edited.question
    )));
    result.affected_cards.push(edited);
    Ok(result)
}
