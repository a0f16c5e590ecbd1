use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::lookup::{SummaryResult, TermLookup};

/// Looks a term up and renders each outcome as its own message:
/// definition (or not found), summary, disambiguation list, or no page.
pub fn run<L: TermLookup>(service: &L, term: &str) -> Result<CmdResult> {
    let info = service.lookup(term)?;
    let mut result = CmdResult::default();

    match info.definition {
        Some(definition) => {
            result.add_message(CmdMessage::info(format!("Definition: {}", definition)))
        }
        None => result.add_message(CmdMessage::info("Definition not found.")),
    }

    match info.summary {
        SummaryResult::Summary(summary) => {
            result.add_message(CmdMessage::info(format!("Wikipedia: {}", summary)));
        }
        SummaryResult::Disambiguation(options) => {
            result.add_message(CmdMessage::warning(format!(
                "Ambiguous term. Please be more specific:\n{}",
                options.join("\n")
            )));
        }
        SummaryResult::NoPage => {
            result.add_message(CmdMessage::warning("No Wikipedia page found."));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::{CardboxError, Result};
    use crate::lookup::TermInfo;

    struct StubLookup(TermInfo);

    impl TermLookup for StubLookup {
        fn lookup(&self, _term: &str) -> Result<TermInfo> {
            Ok(self.0.clone())
        }
    }

    struct FailingLookup;

    impl TermLookup for FailingLookup {
        fn lookup(&self, _term: &str) -> Result<TermInfo> {
            Err(CardboxError::Lookup("connection refused".into()))
        }
    }

    #[test]
    fn renders_definition_and_summary() {
        let stub = StubLookup(TermInfo {
            definition: Some("A metal oxide.".into()),
            summary: SummaryResult::Summary("Rust is an oxide. It is red.".into()),
        });

        let result = run(&stub, "rust").unwrap();
        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[0].content, "Definition: A metal oxide.");
        assert!(result.messages[1].content.starts_with("Wikipedia: "));
    }

    #[test]
    fn missing_definition_has_its_own_message() {
        let stub = StubLookup(TermInfo {
            definition: None,
            summary: SummaryResult::NoPage,
        });

        let result = run(&stub, "zzzz").unwrap();
        assert_eq!(result.messages[0].content, "Definition not found.");
        assert_eq!(result.messages[1].content, "No Wikipedia page found.");
        assert!(matches!(result.messages[1].level, MessageLevel::Warning));
    }

    #[test]
    fn disambiguation_lists_options() {
        let stub = StubLookup(TermInfo {
            definition: Some("A planet or element.".into()),
            summary: SummaryResult::Disambiguation(vec![
                "Mercury (planet)".into(),
                "Mercury (element)".into(),
            ]),
        });

        let result = run(&stub, "mercury").unwrap();
        assert!(result.messages[1].content.contains("Mercury (planet)"));
        assert!(result.messages[1].content.contains("Mercury (element)"));
    }

    #[test]
    fn service_failure_propagates() {
        let err = run(&FailingLookup, "rust").unwrap_err();
        assert!(matches!(err, CardboxError::Lookup(_)));
    }
}
