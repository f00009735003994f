//! Route table and the guard that gates protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard is a one-shot predicate evaluated on each navigation: given the
//! session and a requested route it either renders or redirects to login.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use crate::state::session::Session;

/// Every client-side route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Signup,
    Map,
}

impl AppRoute {
    pub const ALL: [Self; 3] = [Self::Login, Self::Signup, Self::Map];

    /// URL path of the route.
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Signup => "/signup",
            Self::Map => "/map",
        }
    }

    /// Path segment as registered with the router (no leading slash).
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Whether the route requires an authenticated session.
    pub fn is_protected(self) -> bool {
        matches!(self, Self::Map)
    }
}

/// Outcome of guarding one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
}

/// Decide whether `route` renders for `session`.
pub fn decide(session: &Session, route: AppRoute) -> GuardDecision {
    if route.is_protected() && !session.is_authenticated() {
        GuardDecision::Redirect(AppRoute::Login.path())
    } else {
        GuardDecision::Render
    }
}
