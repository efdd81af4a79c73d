//! Explicit handles to the elements the page binds to.
//!
//! `PageElements::locate` is the only place that looks elements up by id or
//! selector. Everything downstream receives the handles it needs.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement};

use crate::config::{BindingConfig, MissingElementPolicy};
use crate::error::{BindError, describe_js};

#[cfg(test)]
#[path = "elements_test.rs"]
mod elements_test;

/// The booking page's interactive elements.
///
/// Singletons are `None` only when [`MissingElementPolicy::Ignore`] let
/// binding continue without them. An empty `slots` list is always valid.
pub struct PageElements {
    pub slots: Vec<Element>,
    pub dialog: Option<HtmlElement>,
    pub book_button: Option<Element>,
    pub advance_button: Option<Element>,
    pub form: Option<HtmlFormElement>,
}

impl PageElements {
    /// Resolve every element named in `config` against `document`.
    ///
    /// A singleton with the wrong element type is an error under either policy.
    pub fn locate(document: &Document, config: &BindingConfig) -> Result<Self, BindError> {
        let policy = config.missing_elements;
        let elements = Self {
            slots: free_slots(document, &config.slot_selector)?,
            dialog: singleton::<HtmlElement>(document, &config.dialog_id, "html element", policy)?,
            book_button: singleton::<Element>(document, &config.book_button_id, "element", policy)?,
            advance_button: singleton::<Element>(document, &config.advance_button_id, "element", policy)?,
            form: singleton::<HtmlFormElement>(document, &config.form_id, "form", policy)?,
        };
        log::info!(
            "located {} free slot(s); dialog={} book={} advance={} form={}",
            elements.slots.len(),
            elements.dialog.is_some(),
            elements.book_button.is_some(),
            elements.advance_button.is_some(),
            elements.form.is_some(),
        );
        Ok(elements)
    }
}

fn free_slots(document: &Document, selector: &str) -> Result<Vec<Element>, BindError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|err| BindError::Selector { selector: selector.to_string(), message: describe_js(&err) })?;
    let mut slots = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        let Some(node) = list.item(index) else {
            continue;
        };
        if let Ok(element) = node.dyn_into::<Element>() {
            slots.push(element);
        }
    }
    Ok(slots)
}

fn singleton<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
    policy: MissingElementPolicy,
) -> Result<Option<T>, BindError> {
    let Some(found) = require(document.get_element_by_id(id), id, policy)? else {
        return Ok(None);
    };
    found
        .dyn_into::<T>()
        .map(Some)
        .map_err(|_| BindError::WrongElementType { id: id.to_string(), expected })
}

/// Apply the missing-element policy to a lookup result.
pub(crate) fn require<T>(found: Option<T>, id: &str, policy: MissingElementPolicy) -> Result<Option<T>, BindError> {
    match (found, policy) {
        (Some(element), _) => Ok(Some(element)),
        (None, MissingElementPolicy::Fail) => Err(BindError::MissingElement { id: id.to_string() }),
        (None, MissingElementPolicy::Ignore) => {
            log::warn!("#{id} not found; its handler will not be bound");
            Ok(None)
        }
    }
}
