//! The hardcoded demo credential pair.
//!
//! There is no credential store: login succeeds only for [`ACCEPTED`],
//! compared exactly (no trimming, case-sensitive).

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

/// An email/password pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: &'static str,
    pub password: &'static str,
}

/// The only pair that logs in.
pub const ACCEPTED: Credentials = Credentials { email: "user@example.com", password: "password123" };

/// Login rejection. Deliberately does not say which field was wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Check a submitted pair against [`ACCEPTED`].
///
/// # Errors
///
/// Returns [`LoginError::InvalidCredentials`] for any other combination.
pub fn check_credentials(email: &str, password: &str) -> Result<(), LoginError> {
    check_against(&ACCEPTED, email, password)
}

pub(crate) fn check_against(accepted: &Credentials, email: &str, password: &str) -> Result<(), LoginError> {
    if email == accepted.email && password == accepted.password {
        Ok(())
    } else {
        Err(LoginError::InvalidCredentials)
    }
}
