//! Page event handling with no browser dependency.
//!
//! `PageCore` maps each DOM event the page cares about to an ordered list of
//! [`Action`]s for the host to carry out. The only state it keeps is the last
//! visibility it asked the dialog to take, whether or not a dialog element
//! was there to receive it.

use crate::config::BindingConfig;
use crate::dialog::Visibility;

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// DOM events the page listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// A free time-slot cell was clicked.
    SlotClicked,
    /// The dialog's "book" button was clicked.
    BookClicked,
    /// The dialog's "advance" button was clicked.
    AdvanceClicked,
    /// The booking form fired `submit`.
    FormSubmitted,
}

impl PageEvent {
    /// The DOM event type the listener is registered for.
    #[must_use]
    pub fn dom_event(self) -> &'static str {
        match self {
            Self::SlotClicked | Self::BookClicked | Self::AdvanceClicked => "click",
            Self::FormSubmitted => "submit",
        }
    }

    /// Whether the DOM default must be cancelled no matter how handling goes.
    #[must_use]
    pub fn cancels_default(self) -> bool {
        matches!(self, Self::FormSubmitted)
    }
}

/// Actions returned from event handling for the host to apply, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Write the dialog's `display` style.
    SetDialog(Visibility),
    /// Show a blocking notice to the user.
    Notify(String),
    /// Cancel the triggering event's default behaviour.
    PreventDefault,
}

#[derive(Debug, Clone, Default)]
pub struct PageCore {
    dialog: Visibility,
    config: BindingConfig,
}

impl PageCore {
    #[must_use]
    pub fn new(config: BindingConfig) -> Self {
        Self { dialog: Visibility::Hidden, config }
    }

    /// Dialog visibility as last requested by the handlers.
    ///
    /// This is the requested state, not a reading of the DOM: with no dialog
    /// bound (ignore policy) a slot click still reports `Shown`.
    #[must_use]
    pub fn dialog(&self) -> Visibility {
        self.dialog
    }

    #[must_use]
    pub fn config(&self) -> &BindingConfig {
        &self.config
    }

    /// Handle one event. Repeating an event repeats its actions; writing the
    /// dialog state it is already in is not an error.
    pub fn handle(&mut self, event: PageEvent) -> Vec<Action> {
        let actions = match event {
            PageEvent::SlotClicked => vec![Action::SetDialog(Visibility::Shown)],
            PageEvent::BookClicked => vec![Action::SetDialog(Visibility::Hidden)],
            PageEvent::AdvanceClicked => vec![
                Action::SetDialog(Visibility::Hidden),
                Action::Notify(self.config.advance_notice.clone()),
            ],
            PageEvent::FormSubmitted => vec![
                Action::PreventDefault,
                Action::Notify(self.config.booked_notice.clone()),
            ],
        };
        for action in &actions {
            if let Action::SetDialog(next) = action {
                self.dialog = *next;
            }
        }
        log::debug!("{event:?} -> {actions:?}");
        actions
    }
}
