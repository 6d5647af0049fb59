//! Entry form state and per-field validation
//!
//! Each input owns a [`FieldState`]; the view is a pure projection of it.
//! Every value-change path re-runs the matching validator before returning,
//! so validity and feedback always agree with the last evaluated value.

use crate::config::AppConfig;
use crate::validators;

/// Validation state of a single input field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub is_valid: bool,
    /// Failing rule for the current value, `None` when valid
    pub message: Option<String>,
    /// Whether the user has edited this field; untouched fields stay
    /// visually neutral until the form is submitted
    pub touched: bool,
}

impl FieldState {
    /// Feedback to render for this field, respecting the visited flag
    pub fn feedback<'a>(&'a self, form_visited: bool) -> Option<&'a str> {
        if self.touched || form_visited {
            self.message.as_deref()
        } else {
            None
        }
    }

    /// Whether validity styling should show yet
    pub fn show_state(&self, form_visited: bool) -> bool {
        self.touched || form_visited
    }
}

/// Entry kind, mirroring income/expense ledgers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumIter)]
pub enum EntryKind {
    Income,
    #[default]
    Expense,
}

/// A fully validated form, ready to become a ledger entry
#[derive(Debug, Clone, PartialEq)]
pub struct ValidEntry {
    pub description: String,
    pub amount: f64,
    pub kind: EntryKind,
}

/// Entry form with real-time validation
#[derive(Debug, Clone, Default)]
pub struct EntryForm {
    pub description: FieldState,
    pub amount: FieldState,
    /// Non-blocking advisory for unusually large amounts; never affects
    /// validity
    pub amount_warning: Option<String>,
    pub kind: EntryKind,
    /// Set when a submit was attempted, so untouched fields show errors too
    pub visited: bool,
    /// Busy flag while an entry is being appended; disables the save button
    pub submitting: bool,
}

impl EntryForm {
    /// Builds a form with a restored draft description. The draft is
    /// validated immediately but left untouched, so no error styling shows
    /// until the user interacts.
    pub fn with_draft(draft: Option<String>) -> Self {
        let mut form = Self::default();
        if let Some(draft) = draft {
            form.description_changed(draft);
            form.description.touched = false;
        }
        form
    }

    /// Character counter value: the untrimmed length of the description
    pub fn description_char_count(&self) -> usize {
        self.description.value.chars().count()
    }

    /// Applies a description edit and re-validates. Runs on every keystroke,
    /// deliberately undebounced.
    pub fn description_changed(&mut self, value: String) {
        match validators::validate_description(&value) {
            Ok(_) => {
                self.description.is_valid = true;
                self.description.message = None;
            }
            Err(message) => {
                self.description.is_valid = false;
                self.description.message = Some(message);
            }
        }
        self.description.value = value;
        self.description.touched = true;
    }

    /// Applies an amount edit and re-validates, refreshing the advisory
    /// warning alongside
    pub fn amount_changed(&mut self, value: String, config: &AppConfig) {
        match validators::validate_amount(&value, config) {
            Ok(amount) => {
                self.amount.is_valid = true;
                self.amount.message = None;
                self.amount_warning = validators::check_high_amount(amount, config);
            }
            Err(message) => {
                self.amount.is_valid = false;
                self.amount.message = Some(message);
                self.amount_warning = None;
            }
        }
        self.amount.value = value;
        self.amount.touched = true;
    }

    /// Masks the amount to two decimal places when focus leaves the field.
    /// Unparsable values are left untouched; error display belongs to the
    /// validator, not to masking.
    pub fn amount_blurred(&mut self, config: &AppConfig) {
        if let Some(masked) = validators::mask_amount(&self.amount.value) {
            self.amount_changed(masked, config);
        }
    }

    /// Validates the whole form for submission.
    ///
    /// Returns the validated entry, or `None` after marking the form visited
    /// so every failing field renders its feedback.
    pub fn try_submit(&mut self, config: &AppConfig) -> Option<ValidEntry> {
        let description = validators::validate_description(&self.description.value);
        let amount = validators::validate_amount(&self.amount.value, config);

        match (description, amount) {
            (Ok(description), Ok(amount)) => Some(ValidEntry {
                description,
                amount,
                kind: self.kind,
            }),
            (description, amount) => {
                self.description.is_valid = description.is_ok();
                self.description.message = description.err();
                self.amount.is_valid = amount.is_ok();
                self.amount.message = amount.err();
                self.visited = true;
                None
            }
        }
    }
}
