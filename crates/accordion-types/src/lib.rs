//! # Accordion Types
//!
//! Framework-free core of the accordion card.
//!
//! - **`error`** - Typed errors for card configuration
//! - **`models`** - Open/closed state, indicator, title, config and the card itself
//!
//! ## Architecture Role
//!
//! ```text
//!     accordion-types (this crate)
//!              │
//!              ▼
//!     accordion-leptos (src-leptos)
//! ```
//!
//! Rendering a card is a pure function of its state and configuration, so everything
//! here can be tested on the host without a browser.

pub mod error;
pub mod models;

pub use error::{ConfigError, Result};

pub use models::{
    Card, CardConfig, CardDeck, CardDeckEntry, CardTitle, CardView, Indicator, OpenState,
};
