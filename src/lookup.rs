//! Term lookup against external dictionary and encyclopedia services.
//!
//! The services are black boxes behind [`TermLookup`] so the command layer
//! can be tested with a stub. Failures come back as
//! [`CardboxError::Lookup`](crate::error::CardboxError::Lookup) and are never
//! fatal to the session.

use crate::error::{CardboxError, Result};
use serde_json::Value;
use std::time::Duration;

const DICTIONARY_API: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
const WIKI_SUMMARY_API: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";
const WIKI_SEARCH_API: &str = "https://en.wikipedia.org/w/api.php";

const SUMMARY_SENTENCES: usize = 2;
const MAX_DISAMBIGUATION_OPTIONS: usize = 5;

/// What the encyclopedia had to say about a term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryResult {
    /// A short summary of the matching page.
    Summary(String),
    /// The term was ambiguous; up to five alternative titles.
    Disambiguation(Vec<String>),
    /// No page for the term.
    NoPage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermInfo {
    /// Dictionary definition, if the term is in the dictionary.
    pub definition: Option<String>,
    pub summary: SummaryResult,
}

pub trait TermLookup {
    fn lookup(&self, term: &str) -> Result<TermInfo>;
}

/// Production lookup against dictionaryapi.dev and Wikipedia.
pub struct HttpLookup {
    client: reqwest::blocking::Client,
}

impl HttpLookup {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(concat!("cardbox/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CardboxError::Lookup(format!("could not build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    fn definition(&self, term: &str) -> Result<Option<String>> {
        let url = format!("{}/{}", DICTIONARY_API, term);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| CardboxError::Lookup(format!("dictionary request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(CardboxError::Lookup(format!(
                "dictionary service returned HTTP {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .map_err(|e| CardboxError::Lookup(format!("bad dictionary response: {}", e)))?;
        Ok(first_definition(&body))
    }

    fn summary(&self, term: &str) -> Result<SummaryResult> {
        // Wikipedia titles use underscores for spaces.
        let title = term.trim().replace(' ', "_");
        let url = format!("{}/{}", WIKI_SUMMARY_API, title);
        let response = self
            .client
            .get(&url)
            .query(&[("redirect", "true")])
            .send()
            .map_err(|e| CardboxError::Lookup(format!("encyclopedia request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(SummaryResult::NoPage);
        }
        if !response.status().is_success() {
            return Err(CardboxError::Lookup(format!(
                "encyclopedia service returned HTTP {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .map_err(|e| CardboxError::Lookup(format!("bad encyclopedia response: {}", e)))?;

        if body["type"].as_str() == Some("disambiguation") {
            let options = self.disambiguation_options(term)?;
            return Ok(SummaryResult::Disambiguation(options));
        }

        match body["extract"].as_str() {
            Some(extract) if !extract.is_empty() => Ok(SummaryResult::Summary(first_sentences(
                extract,
                SUMMARY_SENTENCES,
            ))),
            _ => Ok(SummaryResult::NoPage),
        }
    }

    fn disambiguation_options(&self, term: &str) -> Result<Vec<String>> {
        let response = self
            .client
            .get(WIKI_SEARCH_API)
            .query(&[
                ("action", "opensearch"),
                ("search", term),
                ("limit", "5"),
                ("format", "json"),
            ])
            .send()
            .map_err(|e| CardboxError::Lookup(format!("title search failed: {}", e)))?;

        let body: Value = response
            .json()
            .map_err(|e| CardboxError::Lookup(format!("bad title search response: {}", e)))?;
        Ok(opensearch_titles(&body))
    }
}

impl TermLookup for HttpLookup {
    fn lookup(&self, term: &str) -> Result<TermInfo> {
        let term = term.trim();
        if term.is_empty() {
            return Err(CardboxError::Lookup("empty term".to_string()));
        }
        Ok(TermInfo {
            definition: self.definition(term)?,
            summary: self.summary(term)?,
        })
    }
}

/// First definition of the first meaning in a dictionaryapi.dev response.
fn first_definition(body: &Value) -> Option<String> {
    body[0]["meanings"][0]["definitions"][0]["definition"]
        .as_str()
        .map(|s| s.to_string())
}

/// Titles from an opensearch response, capped at five.
fn opensearch_titles(body: &Value) -> Vec<String> {
    body[1]
        .as_array()
        .map(|titles| {
            titles
                .iter()
                .filter_map(|t| t.as_str())
                .take(MAX_DISAMBIGUATION_OPTIONS)
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Truncates prose to its first `n` sentences.
fn first_sentences(text: &str, n: usize) -> String {
    let mut taken = String::new();
    let mut count = 0;
    for chunk in text.split_inclusive(". ") {
        taken.push_str(chunk);
        count += 1;
        if count == n {
            break;
        }
    }
    taken.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_first_definition() {
        let body = json!([{
            "word": "rust",
            "meanings": [{
                "partOfSpeech": "noun",
                "definitions": [
                    {"definition": "The deteriorated state of iron."},
                    {"definition": "A plant disease."}
                ]
            }]
        }]);
        assert_eq!(
            first_definition(&body).as_deref(),
            Some("The deteriorated state of iron.")
        );
    }

    #[test]
    fn missing_definition_is_none() {
        assert_eq!(first_definition(&json!([])), None);
        assert_eq!(first_definition(&json!({"title": "No Definitions Found"})), None);
    }

    #[test]
    fn opensearch_titles_are_capped_at_five() {
        let body = json!([
            "mercury",
            ["Mercury (planet)", "Mercury (element)", "Mercury (mythology)",
             "Mercury Records", "Freddie Mercury", "Mercury Marine"],
            [], []
        ]);
        let titles = opensearch_titles(&body);
        assert_eq!(titles.len(), 5);
        assert_eq!(titles[0], "Mercury (planet)");
    }

    #[test]
    fn first_sentences_takes_two() {
        let text = "One. Two. Three. Four.";
        assert_eq!(first_sentences(text, 2), "One. Two.");
    }

    #[test]
    fn first_sentences_handles_short_text() {
        assert_eq!(first_sentences("Just one sentence.", 2), "Just one sentence.");
    }
}
