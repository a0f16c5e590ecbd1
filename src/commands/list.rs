use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CardStore;

pub fn run<S: CardStore>(store: &S) -> Result<CmdResult> {
    let cards = store.load()?;
    Ok(CmdResult::default().with_listed_cards(cards))
}
