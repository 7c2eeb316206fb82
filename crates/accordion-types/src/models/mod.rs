//! Core domain models for the accordion card.

mod card;
mod config;
mod state;
mod title;

pub use card::{container_class, Card, CardView, CONTAINER_CLASS};
pub use config::{CardConfig, CardDeck, CardDeckEntry};
pub use state::{Indicator, OpenState};
pub use title::CardTitle;
