//! Reusable UI components.

pub mod map_host;
pub mod password_checklist;
pub mod welcome_banner;
