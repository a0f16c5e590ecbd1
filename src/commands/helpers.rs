use crate::model::Flashcard;

/// Result of matching a deck against a question, by trimmed
/// case-insensitive equality.
pub struct QuestionMatch {
    /// Position of the first matching card, store order.
    pub first: Option<usize>,
    /// Total number of matching cards. More than one means the question
    /// text is ambiguous and only the first match will be acted on.
    pub count: usize,
}

pub fn find_by_question(cards: &[Flashcard], target: &str) -> QuestionMatch {
    let mut first = None;
    let mut count = 0;
    for (i, card) in cards.iter().enumerate() {
        if card.matches_question(target) {
            if first.is_none() {
                first = Some(i);
            }
            count += 1;
        }
    }
    QuestionMatch { first, count }
}

/// Treats blank or whitespace-only input as "keep the current value".
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_of_duplicates() {
        let cards = vec![
            Flashcard::new("Other".into(), "x".into()),
            Flashcard::new("Dup".into(), "first".into()),
            Flashcard::new(" dup ".into(), "second".into()),
        ];
        let m = find_by_question(&cards, "DUP");
        assert_eq!(m.first, Some(1));
        assert_eq!(m.count, 2);
    }

    #[test]
    fn no_match_reports_zero() {
        let cards = vec![Flashcard::new("Q".into(), "A".into())];
        let m = find_by_question(&cards, "missing");
        assert_eq!(m.first, None);
        assert_eq!(m.count, 0);
    }

    #[test]
    fn non_blank_filters_whitespace() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(non_blank(Some("kept".into())), Some("kept".into()));
    }
}
