//! The binding contract with the booking page markup.

// ── Selectors and ids ───────────────────────────────────────────

/// Selector matching every free time-slot cell in the schedule table.
pub const FREE_SLOT_SELECTOR: &str = "td.na";

/// Id of the booking dialog overlay.
pub const DIALOG_ID: &str = "dialog";

/// Id of the dialog's "book" button.
pub const BOOK_BUTTON_ID: &str = "bookBtn";

/// Id of the dialog's "advance" button.
pub const ADVANCE_BUTTON_ID: &str = "advanceBtn";

/// Id of the meeting booking form.
pub const MEETING_FORM_ID: &str = "meetingForm";

// ── Dialog display ──────────────────────────────────────────────

/// CSS `display` value for a shown dialog. The overlay lays out as flexbox.
pub const DISPLAY_SHOWN: &str = "flex";

/// CSS `display` value for a hidden dialog.
pub const DISPLAY_HIDDEN: &str = "none";

// ── Notices ─────────────────────────────────────────────────────

/// Placeholder notice after the "advance" button.
pub const ADVANCE_NOTICE: &str = "hai";

/// Placeholder notice after the booking form is submitted.
pub const BOOKED_NOTICE: &str = "Meeting booked! (Demo only)";

// ── Page overrides ──────────────────────────────────────────────

/// `<html>` attribute selecting the missing-element policy (`fail` / `ignore`).
pub const MISSING_ELEMENTS_ATTR: &str = "data-missing-elements";

/// `<html>` attribute selecting the console log level.
pub const LOG_LEVEL_ATTR: &str = "data-log-level";
