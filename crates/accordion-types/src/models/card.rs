//! The card state machine and its render projection.

use serde::Serialize;

use super::config::CardConfig;
use super::state::{Indicator, OpenState};
use super::title::CardTitle;

/// Classes every card container carries.
pub const CONTAINER_CLASS: &str = "accordion-card d-flex flex-column px-3 py-3 m-0";

/// A collapsible card: configuration plus its own open/closed state.
///
/// The state is private and changes only through [`Card::on_header_activate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    config: CardConfig,
    state: OpenState,
}

/// What a card looks like for a given state. Pure output of [`Card::render`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub title: CardTitle,
    pub state: OpenState,
    pub indicator: Indicator,
    pub content_visible: bool,
    pub container_class: String,
}

impl Card {
    pub fn new(config: CardConfig) -> Self {
        let state = OpenState::from(config.default_open);
        Self { config, state }
    }

    pub fn state(&self) -> OpenState {
        self.state
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn title(&self) -> &CardTitle {
        &self.config.title
    }

    /// Header was clicked, tapped or keyboard-activated.
    pub fn on_header_activate(&mut self) -> OpenState {
        self.state.toggle();
        self.state
    }

    pub fn render(&self) -> CardView {
        CardView {
            title: self.config.title.clone(),
            state: self.state,
            indicator: self.state.indicator(),
            content_visible: self.state.is_open(),
            container_class: container_class(self.config.class.as_deref()),
        }
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new(CardConfig::default())
    }
}

/// Fixed container classes followed by the caller's hook, if it has any content.
pub fn container_class(extra: Option<&str>) -> String {
    match extra.map(str::trim).filter(|extra| !extra.is_empty()) {
        Some(extra) => format!("{CONTAINER_CLASS} {extra}"),
        None => CONTAINER_CLASS.to_owned(),
    }
}
