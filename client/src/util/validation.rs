//! Signup form validation and the live password policy.
//!
//! DESIGN
//! ======
//! Password rules overwrite rather than accumulate: each failing rule replaces
//! the message of the one before it, so at most one password error is ever
//! shown. Rule order is digit, special character, then length; a password
//! failing everything reports the length rule.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use crate::state::form::{FormState, SignupField};

pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Email is invalid.";
pub const PASSWORD_REQUIRED: &str = "Password is required.";
pub const PASSWORD_NEEDS_DIGIT: &str = "Password must contain at least one number.";
pub const PASSWORD_NEEDS_SPECIAL: &str = "Password must contain at least one special character.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long.";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match.";

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Characters that satisfy the special-character rule.
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Outcome of each password rule; recomputed on every keystroke.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordPolicyResult {
    pub length_ok: bool,
    pub has_digit: bool,
    pub has_special_char: bool,
}

impl PasswordPolicyResult {
    pub fn evaluate(password: &str) -> Self {
        Self {
            length_ok: password.chars().count() >= MIN_PASSWORD_LEN,
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
            has_special_char: password.chars().any(|c| SPECIAL_CHARS.contains(c)),
        }
    }

    pub fn all_ok(self) -> bool {
        self.length_ok && self.has_digit && self.has_special_char
    }

    /// The message of the last failing rule, in rule order.
    pub fn error(self) -> Option<&'static str> {
        let mut error = None;
        if !self.has_digit {
            error = Some(PASSWORD_NEEDS_DIGIT);
        }
        if !self.has_special_char {
            error = Some(PASSWORD_NEEDS_SPECIAL);
        }
        if !self.length_ok {
            error = Some(PASSWORD_TOO_SHORT);
        }
        error
    }
}

/// Loose `text@text.text` shape check.
///
/// Matches anywhere in the input: some whitespace-free run must contain a
/// non-empty part, `@`, a non-empty part, `.`, and a non-empty part.
pub fn looks_like_email(input: &str) -> bool {
    input.split_whitespace().any(|token| {
        let chars: Vec<char> = token.chars().collect();
        chars.iter().enumerate().any(|(at, c)| {
            *c == '@'
                && at > 0
                && chars
                    .iter()
                    .enumerate()
                    .any(|(dot, d)| *d == '.' && dot > at + 1 && dot + 1 < chars.len())
        })
    })
}

/// Validate the signup form at submit time.
pub fn validate_signup(form: &FormState<SignupField>) -> BTreeMap<SignupField, String> {
    let mut errors = BTreeMap::new();

    let email = form.value(SignupField::Email);
    if email.is_empty() {
        errors.insert(SignupField::Email, EMAIL_REQUIRED.to_owned());
    } else if !looks_like_email(email) {
        errors.insert(SignupField::Email, EMAIL_INVALID.to_owned());
    }

    let password = form.value(SignupField::Password);
    if password.is_empty() {
        errors.insert(SignupField::Password, PASSWORD_REQUIRED.to_owned());
    } else if let Some(message) = PasswordPolicyResult::evaluate(password).error() {
        errors.insert(SignupField::Password, message.to_owned());
    }

    if form.value(SignupField::ConfirmPassword) != password {
        errors.insert(SignupField::ConfirmPassword, PASSWORDS_DIFFER.to_owned());
    }

    errors
}
