//! Construction-time configuration of a card.
//!
//! Every field is optional. JSON keys are camelCase (`title`, `defaultOpen`, `className`)
//! so configs can be shared with the web side unchanged.

use serde::{Deserialize, Serialize};

use super::title::CardTitle;
use crate::error::{ConfigError, Result};

/// Configuration of a single card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardConfig {
    /// Header text, "Summary" when absent
    #[serde(default)]
    pub title: CardTitle,
    /// Whether the card starts expanded
    #[serde(default)]
    pub default_open: bool,
    /// Extra classes appended to the container
    #[serde(default, rename = "className", skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl CardConfig {
    pub fn with_title(mut self, title: impl Into<CardTitle>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_default_open(mut self, default_open: bool) -> Self {
        self.default_open = default_open;
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::from_json_error(&e))
    }
}

/// One card of a deck: its config plus a plain-text body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDeckEntry {
    #[serde(flatten)]
    pub card: CardConfig,
    #[serde(default)]
    pub body: String,
}

/// An ordered list of cards, stored as a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardDeck(Vec<CardDeckEntry>);

impl CardDeck {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn entries(&self) -> &[CardDeckEntry] {
        &self.0
    }

    pub fn into_entries(self) -> Vec<CardDeckEntry> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<CardDeckEntry>> for CardDeck {
    fn from(entries: Vec<CardDeckEntry>) -> Self {
        Self(entries)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = CardConfig::from_json("{}").unwrap();
        assert_eq!(config.title.as_str(), "Summary");
        assert!(!config.default_open);
        assert_eq!(config.class, None);
    }

    #[test]
    fn test_camel_case_keys() {
        let config = CardConfig::from_json(
            r#"{"title": "Details", "defaultOpen": true, "className": "mb-4"}"#,
        )
        .unwrap();
        let expected =
            CardConfig::default().with_title("Details").with_default_open(true).with_class("mb-4");
        assert_eq!(config, expected);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = CardConfig::from_json(r#"{"defaultOpen": "yes"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_deck_entries_flatten_config() {
        let deck = CardDeck::from_json(
            r#"[
                {"title": "Details", "body": "Line items"},
                {"defaultOpen": true}
            ]"#,
        )
        .unwrap();

        assert_eq!(deck.len(), 2);
        let entries = deck.entries();
        assert_eq!(entries[0].card.title.as_str(), "Details");
        assert_eq!(entries[0].body, "Line items");
        assert_eq!(entries[1].card.title.as_str(), "Summary");
        assert!(entries[1].card.default_open);
        assert!(entries[1].body.is_empty());
    }

    #[test]
    fn test_deck_must_be_array() {
        assert!(CardDeck::from_json(r#"{"title": "x"}"#).is_err());
    }
}
