//! Open/closed state of a card and the chevron that mirrors it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether the content region of a card is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenState {
    #[default]
    Collapsed,
    Expanded,
}

impl OpenState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Expanded)
    }

    /// Flip in place. Two calls restore the original state.
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    pub fn indicator(self) -> Indicator {
        match self {
            Self::Collapsed => Indicator::Down,
            Self::Expanded => Indicator::Up,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Collapsed => "collapsed",
            Self::Expanded => "expanded",
        }
    }
}

impl From<bool> for OpenState {
    fn from(open: bool) -> Self {
        if open {
            Self::Expanded
        } else {
            Self::Collapsed
        }
    }
}

impl From<OpenState> for bool {
    fn from(state: OpenState) -> Self {
        state.is_open()
    }
}

impl fmt::Display for OpenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of the chevron in the card header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    /// Card is collapsed; activating it will open downwards.
    Down,
    /// Card is expanded.
    Up,
}

impl Indicator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Up => "up",
        }
    }

    /// Icon name in the chevron icon set.
    pub fn icon_name(self) -> &'static str {
        match self {
            Self::Down => "chevron-down",
            Self::Up => "chevron-up",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Down => "▼",
            Self::Up => "▲",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
