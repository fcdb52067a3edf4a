//! Field validation and touched-field tracking shared by the edit/create forms.
//!
//! DESIGN
//! ======
//! Errors are always derived from the current field values; nothing caches
//! them. Visibility is a separate concern: an error is shown only once its
//! field has been touched (blur) or the user tried to submit.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::{BTreeMap, BTreeSet};

/// Message for an empty required field.
pub const REQUIRED: &str = "Required";

/// Validation errors keyed by field.
pub type FieldErrors<F> = BTreeMap<F, String>;

/// Which fields the user has interacted with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Touched<F: Ord> {
    fields: BTreeSet<F>,
    all: bool,
}

impl<F: Ord> Default for Touched<F> {
    fn default() -> Self {
        Self { fields: BTreeSet::new(), all: false }
    }
}

impl<F: Ord> Touched<F> {
    pub fn touch(&mut self, field: F) {
        self.fields.insert(field);
    }

    /// Submit attempt: every field counts as touched from now on.
    pub fn touch_all(&mut self) {
        self.all = true;
    }

    pub fn is_touched(&self, field: &F) -> bool {
        self.all || self.fields.contains(field)
    }
}

/// The error for `field`, if it is both present and visible.
pub fn visible_error<'a, F: Ord>(errors: &'a FieldErrors<F>, touched: &Touched<F>, field: &F) -> Option<&'a str> {
    if !touched.is_touched(field) {
        return None;
    }
    errors.get(field).map(String::as_str)
}

/// Record [`REQUIRED`] for `field` when `value` is blank.
pub fn require<F: Ord>(errors: &mut FieldErrors<F>, field: F, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field, REQUIRED.to_owned());
    }
}

/// Parse a price-like input. Blank is [`REQUIRED`]; non-numeric or negative
/// input reports `"{label} must be ≥ 0"`.
pub fn parse_non_negative(value: &str, label: &str) -> Result<f64, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(REQUIRED.to_owned());
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(n),
        _ => Err(format!("{label} must be ≥ 0")),
    }
}

/// [`parse_non_negative`] that records the failure under `field`.
pub fn check_non_negative<F: Ord>(errors: &mut FieldErrors<F>, field: F, value: &str, label: &str) -> Option<f64> {
    match parse_non_negative(value, label) {
        Ok(n) => Some(n),
        Err(message) => {
            errors.insert(field, message);
            None
        }
    }
}

/// Render a stored number back into an input value (`12` rather than `12.0`).
pub fn format_number(value: f64) -> String {
    format!("{value}")
}
