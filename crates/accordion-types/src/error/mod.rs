//! Typed error definitions for the accordion card.
//!
//! Rendering and toggling cannot fail; only configuration parsing can.

mod config;

pub use config::ConfigError;

/// Standard Result type using ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;
