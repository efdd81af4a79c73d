//! Booking dialog visibility.

use crate::consts::{DISPLAY_HIDDEN, DISPLAY_SHOWN};

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

/// The dialog overlay is either shown or hidden. It starts hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    /// The CSS `display` value that renders this state.
    #[must_use]
    pub fn display_value(self) -> &'static str {
        match self {
            Self::Hidden => DISPLAY_HIDDEN,
            Self::Shown => DISPLAY_SHOWN,
        }
    }

    #[must_use]
    pub fn is_shown(self) -> bool {
        self == Self::Shown
    }
}
