//! web-sys implementations of the dispatch seams.

use web_sys::{HtmlElement, Window};

use crate::dispatch::{DialogSurface, Notifier};
use crate::error::{DomError, describe_js};

impl DialogSurface for HtmlElement {
    fn set_display(&self, value: &str) -> Result<(), DomError> {
        self.style()
            .set_property("display", value)
            .map_err(|err| DomError(describe_js(&err)))
    }
}

/// Shows notices with `window.alert`.
pub struct AlertNotifier {
    window: Window,
}

impl AlertNotifier {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) -> Result<(), DomError> {
        self.window
            .alert_with_message(message)
            .map_err(|err| DomError(describe_js(&err)))
    }
}
