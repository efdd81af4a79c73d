//! Binding configuration: which elements to bind and what to do when they are missing.
//!
//! Defaults reproduce the booking page markup contract in [`crate::consts`].
//! A host page can override individual fields by passing a JS object to
//! `start_with_config`, and can flip the policy or log level with `data-`
//! attributes on the `<html>` element.

use serde::Deserialize;

use crate::consts::{
    ADVANCE_BUTTON_ID, ADVANCE_NOTICE, BOOK_BUTTON_ID, BOOKED_NOTICE, DIALOG_ID, FREE_SLOT_SELECTOR,
    LOG_LEVEL_ATTR, MEETING_FORM_ID, MISSING_ELEMENTS_ATTR,
};
use crate::error::ConfigError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// What to do when a required singleton element is absent at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingElementPolicy {
    /// Abort binding with [`crate::error::BindError::MissingElement`].
    #[default]
    Fail,
    /// Log a warning and bind whatever is present.
    Ignore,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BindingConfig {
    pub slot_selector: String,
    pub dialog_id: String,
    pub book_button_id: String,
    pub advance_button_id: String,
    pub form_id: String,
    pub advance_notice: String,
    pub booked_notice: String,
    pub missing_elements: MissingElementPolicy,
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            slot_selector: FREE_SLOT_SELECTOR.to_string(),
            dialog_id: DIALOG_ID.to_string(),
            book_button_id: BOOK_BUTTON_ID.to_string(),
            advance_button_id: ADVANCE_BUTTON_ID.to_string(),
            form_id: MEETING_FORM_ID.to_string(),
            advance_notice: ADVANCE_NOTICE.to_string(),
            booked_notice: BOOKED_NOTICE.to_string(),
            missing_elements: MissingElementPolicy::Fail,
            log_level: "info".to_string(),
        }
    }
}

impl BindingConfig {
    /// Apply page-level overrides read through `lookup` (attribute name → value).
    ///
    /// Recognised keys are `data-missing-elements` and `data-log-level`.
    /// Absent keys leave the current value in place.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(MISSING_ELEMENTS_ATTR) {
            self.missing_elements = parse_policy(&raw)?;
        }
        if let Some(raw) = lookup(LOG_LEVEL_ATTR) {
            parse_log_level(&raw)?;
            self.log_level = raw.trim().to_ascii_lowercase();
        }
        Ok(self)
    }

    /// Reject configs that could never bind anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("slot_selector", &self.slot_selector),
            ("dialog_id", &self.dialog_id),
            ("book_button_id", &self.book_button_id),
            ("advance_button_id", &self.advance_button_id),
            ("form_id", &self.form_id),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty { field });
            }
        }
        parse_log_level(&self.log_level)?;
        Ok(())
    }

    /// The configured console log level.
    pub fn level(&self) -> log::Level {
        parse_log_level(&self.log_level).unwrap_or(log::Level::Info)
    }
}

fn parse_policy(raw: &str) -> Result<MissingElementPolicy, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "fail" | "" => Ok(MissingElementPolicy::Fail),
        "ignore" => Ok(MissingElementPolicy::Ignore),
        other => Err(ConfigError::UnknownPolicy(other.to_string())),
    }
}

fn parse_log_level(raw: &str) -> Result<log::Level, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => Ok(log::Level::Error),
        "warn" => Ok(log::Level::Warn),
        "info" => Ok(log::Level::Info),
        "debug" => Ok(log::Level::Debug),
        "trace" => Ok(log::Level::Trace),
        other => Err(ConfigError::UnknownLogLevel(other.to_string())),
    }
}
