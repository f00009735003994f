//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form or view orchestration and exposes the submit
//! decision as a pure function so it can be tested without a browser.

pub mod login;
pub mod map;
pub mod signup;
