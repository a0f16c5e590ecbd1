use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Flashcard;
use crate::review::order_for_review;
use crate::store::CardStore;
use chrono::Utc;

/// Loads the deck sorted most-stale-first, ready for a review session.
pub fn queue<S: CardStore>(store: &S) -> Result<Vec<Flashcard>> {
    let mut cards = store.load()?;
    order_for_review(&mut cards, Utc::now());
    Ok(cards)
}

/// Persists a card that was just revealed. Reloads the deck, replaces the
/// card by id and writes everything back, so the file mirrors the review
/// as it progresses. A card deleted mid-session is skipped.
///
/// Records from files predating the id field get a fresh id on every load,
/// so when the id misses we fall back to the question-text identity.
pub fn record_reviewed<S: CardStore>(store: &mut S, reviewed: &Flashcard) -> Result<CmdResult> {
    let mut cards = store.load()?;
    let mut result = CmdResult::default();

    let position = cards
        .iter()
        .position(|c| c.id == reviewed.id)
        .or_else(|| cards.iter().position(|c| c.matches_question(&reviewed.question)));

    match position {
        Some(i) => {
            cards[i] = reviewed.clone();
            store.save(&cards)?;
            result.affected_cards.push(reviewed.clone());
        }
        None => {
            result.add_message(CmdMessage::info(format!(
                "Flashcard no longer in store, review not recorded: {}",
                reviewed.question
            )));
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn queue_is_sorted_most_stale_first() {
        let fixture = StoreFixture::new()
            .with_stale_card("one day", "a", 1)
            .with_stale_card("twelve days", "b", 12)
            .with_stale_card("five days", "c", 5);

        let queued = queue(&fixture.store).unwrap();
        let questions: Vec<_> = queued.iter().map(|c| c.question.as_str()).collect();
        assert_eq!(questions, ["twelve days", "five days", "one day"]);
    }

    #[test]
    fn record_reviewed_updates_the_stored_card() {
        let mut fixture = StoreFixture::new().with_stale_card("stale", "a", 12);
        let mut card = fixture.store.load().unwrap()[0].clone();
        let before = card.last_used_at;
        card.mark_used();

        record_reviewed(&mut fixture.store, &card).unwrap();

        let stored = fixture.store.load().unwrap();
        assert!(stored[0].last_used_at > before);
        assert_eq!(stored[0].created_at, card.created_at);
    }

    #[test]
    fn record_reviewed_falls_back_to_question_identity() {
        let mut fixture = StoreFixture::new().with_stale_card("stale", "a", 12);
        let mut reviewed = fixture.store.load().unwrap()[0].clone();
        reviewed.id = uuid::Uuid::new_v4();
        reviewed.mark_used();

        record_reviewed(&mut fixture.store, &reviewed).unwrap();

        let cards = fixture.store.load().unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].last_used_at, reviewed.last_used_at);
    }

    #[test]
    fn record_reviewed_skips_deleted_cards() {
        let mut fixture = StoreFixture::new().with_card("kept", "a");
        let ghost = Flashcard::new("gone".into(), "b".into());

        let result = record_reviewed(&mut fixture.store, &ghost).unwrap();

        assert!(result.affected_cards.is_empty());
        assert_eq!(fixture.store.load().unwrap().len(), 1);
    }
}
