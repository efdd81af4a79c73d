//! Interaction handlers for the meeting room booking page.
//!
//! This crate is compiled to WebAssembly and loaded by the booking page. It
//! opens the booking dialog when a free time slot is clicked, closes it from
//! the dialog's two buttons, and intercepts the booking form so that
//! submitting it shows a demo notice instead of navigating away.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Testable [`page::PageCore`]: event to action mapping |
//! | [`dispatch`] | Applies actions through the [`dispatch::DialogSurface`] / [`dispatch::Notifier`] seams |
//! | [`dialog`] | Dialog visibility states |
//! | [`elements`] | Explicit handles to the bound DOM elements |
//! | [`binding`] | Registers DOM listeners and owns their closures |
//! | [`browser`] | web-sys implementations of the seams |
//! | [`config`] | Binding configuration and page overrides |
//! | [`error`] | Startup error types |
//! | [`consts`] | Selectors, element ids, and notice text |

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

pub mod binding;
pub mod browser;
pub mod config;
pub mod consts;
pub mod dialog;
pub mod dispatch;
pub mod elements;
pub mod error;
pub mod page;

use crate::binding::{BoundPage, bind};
use crate::browser::AlertNotifier;
use crate::config::BindingConfig;
use crate::elements::PageElements;
use crate::error::{BindError, ConfigError};

thread_local! {
    static PAGE: RefCell<Option<BoundPage>> = const { RefCell::new(None) };
}

/// Bind the booking page with the default element ids.
///
/// Call once the page's markup has loaded. Calling again while bound is a
/// no-op.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    start_with(BindingConfig::default())?;
    Ok(())
}

/// Bind the booking page with overrides from a plain JS object.
///
/// Every field of [`BindingConfig`] is optional; `undefined` or `null` means
/// the defaults.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(config: JsValue) -> Result<(), JsValue> {
    let config = if config.is_undefined() || config.is_null() {
        BindingConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(|err| BindError::from(ConfigError::Decode(err.to_string())))?
    };
    start_with(config)?;
    Ok(())
}

/// Remove every listener registered by `start`. Returns whether the page was bound.
#[wasm_bindgen]
pub fn stop() -> bool {
    PAGE.with(|slot| slot.borrow_mut().take().is_some())
}

/// Listeners registered by the bound page, or `None` when nothing is bound.
pub fn listener_count() -> Option<usize> {
    PAGE.with(|slot| slot.borrow().as_ref().map(BoundPage::listener_count))
}

fn start_with(config: BindingConfig) -> Result<(), BindError> {
    console_error_panic_hook::set_once();

    if PAGE.with(|slot| slot.borrow().is_some()) {
        log::warn!("booking page already bound; ignoring start");
        return Ok(());
    }

    let window = web_sys::window().ok_or(BindError::NoWindow)?;
    let document = window.document().ok_or(BindError::NoDocument)?;
    let root = document.document_element();
    let config = config.apply_overrides(|attr| root.as_ref().and_then(|el| el.get_attribute(attr)))?;
    config.validate()?;
    init_logging(config.level());

    let elements = PageElements::locate(&document, &config)?;
    let page = bind(elements, config, Rc::new(AlertNotifier::new(window)))?;
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

fn init_logging(level: log::Level) {
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("console logger already installed: {err}");
    }
    log::set_max_level(level.to_level_filter());
}
