//! Configuration-related errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading card configuration.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ConfigError {
    /// Config document could not be parsed as JSON
    #[error("Config parse error at line {line}, column {column}: {message}")]
    ParseError {
        /// Description of the parse failure
        message: String,
        /// 1-based line of the failure, 0 if unknown
        line: usize,
        /// 1-based column of the failure, 0 if unknown
        column: usize,
    },
}

impl ConfigError {
    /// Create a parse error from a serde_json error.
    pub fn from_json_error(e: &serde_json::Error) -> Self {
        Self::ParseError { message: e.to_string(), line: e.line(), column: e.column() }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::from_json_error(&e)
    }
}
