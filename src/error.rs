//! Startup errors raised while binding the page.
//!
//! Every failure here happens once, at load time. After binding succeeds the
//! listeners have no error path of their own; DOM write failures inside a
//! handler are logged and skipped.

use wasm_bindgen::JsValue;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Invalid value in a binding configuration field or page override.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown missing-element policy: {0}")]
    UnknownPolicy(String),
    #[error("unknown log level: {0}")]
    UnknownLogLevel(String),
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("invalid config object: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing element #{id}")]
    MissingElement { id: String },
    #[error("element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },
    #[error("selector {selector:?} rejected: {message}")]
    Selector { selector: String, message: String },
    #[error("failed to attach {event} listener: {message}")]
    Listener { event: &'static str, message: String },
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// A DOM write or browser call failed after binding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("dom call failed: {0}")]
pub struct DomError(pub String);

impl From<BindError> for JsValue {
    fn from(err: BindError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Render a thrown JS value for an error message.
pub(crate) fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
