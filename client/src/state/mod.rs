//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the only state that crosses component boundaries; `form` is
//! the per-form model each auth page owns and drops on unmount.

pub mod form;
pub mod session;
