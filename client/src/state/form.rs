//! Per-form field values and validation errors.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

/// Fields of the login form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoginField {
    Email,
    Password,
}

/// Fields of the signup form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SignupField {
    Email,
    Password,
    ConfirmPassword,
}

/// Current values and error messages for one form.
///
/// Values change on every keystroke; errors are replaced wholesale on submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState<F: Ord> {
    values: BTreeMap<F, String>,
    errors: BTreeMap<F, String>,
}

impl<F: Ord> Default for FormState<F> {
    fn default() -> Self {
        Self { values: BTreeMap::new(), errors: BTreeMap::new() }
    }
}

impl<F: Ord + Copy> FormState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `field`; empty if never typed.
    pub fn value(&self, field: F) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    pub fn set_value(&mut self, field: F, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn error(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<F, String> {
        &self.errors
    }

    /// Replace all errors with the result of a submit-time validation.
    pub fn set_errors(&mut self, errors: BTreeMap<F, String>) {
        self.errors = errors;
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
