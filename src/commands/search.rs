use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CardStore;

/// Case-insensitive substring match against question or answer.
/// All matches, store order, no ranking.
pub fn run<S: CardStore>(store: &S, term: &str) -> Result<CmdResult> {
    let cards = store.load()?;
    let term_lower = term.to_lowercase();

    let matches: Vec<_> = cards
        .into_iter()
        .filter(|card| {
            card.question.to_lowercase().contains(&term_lower)
                || card.answer.to_lowercase().contains(&term_lower)
        })
        .collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info("No matching flashcards found."));
    }
    result.listed_cards = matches;
    Ok(result)
}
