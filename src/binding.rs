//! Attach the page's DOM listeners.
//!
//! A [`BoundPage`] owns every listener closure it registers. Dropping it
//! removes the listeners from their targets, so the page can be unbound and
//! bound again without leaking closures or double-firing handlers.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget, HtmlElement};

use crate::config::BindingConfig;
use crate::dialog::Visibility;
use crate::dispatch::{DialogSurface, Notifier, Outcome, dispatch};
use crate::elements::PageElements;
use crate::error::{BindError, describe_js};
use crate::page::{PageCore, PageEvent};

#[cfg(test)]
#[path = "binding_test.rs"]
mod binding_test;

struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

pub struct BoundPage {
    core: Rc<RefCell<PageCore>>,
    dialog: Option<HtmlElement>,
    notifier: Rc<dyn Notifier>,
    listeners: Vec<Listener>,
}

impl BoundPage {
    /// Dialog visibility as last requested by the handlers.
    #[must_use]
    pub fn dialog(&self) -> Visibility {
        self.core.borrow().dialog()
    }

    /// Number of DOM listeners currently registered.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn listen(&mut self, target: &EventTarget, event: PageEvent) -> Result<(), BindError> {
        let core = Rc::clone(&self.core);
        let dialog = self.dialog.clone();
        let notifier = Rc::clone(&self.notifier);
        let closure = Closure::wrap(Box::new(move |ev: Event| {
            if event.cancels_default() {
                ev.prevent_default();
            }
            let surface = dialog.as_ref().map(|d| d as &dyn DialogSurface);
            let outcome = handle_event(&core, event, surface, &*notifier);
            if outcome.prevent_default && !ev.default_prevented() {
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(Event)>);

        let name = event.dom_event();
        target
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            .map_err(|err| BindError::Listener { event: name, message: describe_js(&err) })?;
        self.listeners.push(Listener { target: target.clone(), event: name, closure });
        Ok(())
    }
}

impl Drop for BoundPage {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            if let Err(err) = listener
                .target
                .remove_event_listener_with_callback(listener.event, listener.closure.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove {} listener: {}", listener.event, describe_js(&err));
            }
        }
        log::debug!("page unbound");
    }
}

/// Run one DOM event through the shared core.
///
/// An event that arrives while the core is already borrowed (a handler is
/// still running) is dropped. The returned outcome still asks for the default
/// to be cancelled when the event always cancels it.
pub(crate) fn handle_event(
    core: &RefCell<PageCore>,
    event: PageEvent,
    surface: Option<&dyn DialogSurface>,
    notifier: &dyn Notifier,
) -> Outcome {
    let Ok(mut core) = core.try_borrow_mut() else {
        log::warn!("{event:?} arrived while another handler was running; dropped");
        return Outcome { prevent_default: event.cancels_default(), notices: 0 };
    };
    dispatch(&mut core, event, surface, notifier)
}

/// Bind every handler to `elements` and put the dialog in its initial hidden state.
///
/// Handlers show notices through `notifier`. Elements missing from
/// `elements` (only possible under the ignore policy) are skipped.
pub fn bind(elements: PageElements, config: BindingConfig, notifier: Rc<dyn Notifier>) -> Result<BoundPage, BindError> {
    let mut page = BoundPage {
        core: Rc::new(RefCell::new(PageCore::new(config))),
        dialog: elements.dialog,
        notifier,
        listeners: Vec::new(),
    };

    if let Some(dialog) = &page.dialog {
        if let Err(err) = dialog.set_display(Visibility::Hidden.display_value()) {
            log::warn!("could not hide dialog at startup: {err}");
        }
    }

    for slot in &elements.slots {
        page.listen(slot, PageEvent::SlotClicked)?;
    }
    if let Some(button) = &elements.book_button {
        page.listen(button, PageEvent::BookClicked)?;
    }
    if let Some(button) = &elements.advance_button {
        page.listen(button, PageEvent::AdvanceClicked)?;
    }
    if let Some(form) = &elements.form {
        page.listen(form, PageEvent::FormSubmitted)?;
    }

    log::info!("bound {} listener(s)", page.listener_count());
    Ok(page)
}
