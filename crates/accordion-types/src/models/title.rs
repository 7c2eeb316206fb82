//! Card header title.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Header text of a card.
///
/// Only an absent title falls back to [`CardTitle::DEFAULT`]; an empty string is kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardTitle(String);

impl CardTitle {
    pub const DEFAULT: &'static str = "Summary";

    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn from_option(title: Option<String>) -> Self {
        title.map_or_else(Self::default, Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for CardTitle {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl From<&str> for CardTitle {
    fn from(title: &str) -> Self {
        Self::new(title)
    }
}

impl From<String> for CardTitle {
    fn from(title: String) -> Self {
        Self(title)
    }
}

impl fmt::Display for CardTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
