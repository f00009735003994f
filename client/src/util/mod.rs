//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure decision logic (guarding, credential checks, form validation) lives
//! here so pages stay thin and the rules are testable without a browser.

pub mod credentials;
pub mod route_guard;
pub mod validation;
