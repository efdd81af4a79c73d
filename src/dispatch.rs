//! Apply [`Action`]s to the page through narrow seams.
//!
//! The listeners in [`crate::binding`] call [`dispatch`] with the real DOM
//! implementations from [`crate::browser`]; tests call it with in-memory fakes.

use crate::error::DomError;
use crate::page::{Action, PageCore, PageEvent};

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

/// Something whose CSS `display` can be written.
pub trait DialogSurface {
    fn set_display(&self, value: &str) -> Result<(), DomError>;
}

/// Something that can show the user a blocking notice.
pub trait Notifier {
    fn notify(&self, message: &str) -> Result<(), DomError>;
}

/// What the host still has to do with the triggering DOM event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    /// The host must call `preventDefault()` on the event.
    pub prevent_default: bool,
    /// Notices delivered to the notifier.
    pub notices: usize,
}

/// Handle `event` and apply the resulting actions in order.
///
/// `surface` is `None` when the dialog element was not found and the missing
/// element policy allowed binding to continue. Failed DOM writes are logged;
/// the remaining actions still run.
pub fn dispatch(
    core: &mut PageCore,
    event: PageEvent,
    surface: Option<&dyn DialogSurface>,
    notifier: &dyn Notifier,
) -> Outcome {
    let mut outcome = Outcome::default();
    for action in core.handle(event) {
        match action {
            Action::SetDialog(visibility) => {
                let Some(surface) = surface else {
                    log::debug!("no dialog bound; skipping {visibility:?}");
                    continue;
                };
                if let Err(err) = surface.set_display(visibility.display_value()) {
                    log::warn!("dialog {visibility:?}: {err}");
                }
            }
            Action::Notify(message) => match notifier.notify(&message) {
                Ok(()) => outcome.notices += 1,
                Err(err) => log::warn!("notice {message:?}: {err}"),
            },
            Action::PreventDefault => outcome.prevent_default = true,
        }
    }
    outcome
}
