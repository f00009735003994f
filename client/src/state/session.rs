//! In-memory session for the "logged-in" user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard and the welcome banner. Written only by the login
//! success path through [`SessionContext::sign_in`]. Nothing is persisted: a
//! full reload starts from [`Session::default`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

/// Transient record of the current user identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<String>,
}

impl Session {
    /// The signed-in user's identifier (their email), if any.
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub(crate) fn sign_in(&mut self, user: impl Into<String>) {
        self.user = Some(user.into());
    }
}

/// Context handle over the reactive session.
///
/// Provided once by `App`. Consumers get reactive reads; the single write
/// entry point is [`SessionContext::sign_in`].
#[derive(Clone, Copy, Debug)]
pub struct SessionContext {
    inner: RwSignal<Session>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self { inner: RwSignal::new(Session::default()) }
    }

    /// Provide a fresh session to the current reactive owner.
    pub fn provide() -> Self {
        let ctx = Self::new();
        provide_context(ctx);
        ctx
    }

    /// Fetch the session provided by an ancestor.
    ///
    /// # Panics
    ///
    /// Panics if no ancestor called [`SessionContext::provide`].
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// Tracked snapshot of the session.
    pub fn get(self) -> Session {
        self.inner.get()
    }

    /// Untracked snapshot, for event handlers.
    pub fn get_untracked(self) -> Session {
        self.inner.get_untracked()
    }

    /// Tracked current user identifier.
    pub fn user(self) -> Option<String> {
        self.inner.with(|s| s.user.clone())
    }

    pub fn is_authenticated(self) -> bool {
        self.inner.with(Session::is_authenticated)
    }

    /// Record a successful login.
    pub fn sign_in(self, user: impl Into<String>) {
        let user = user.into();
        self.inner.update(|s| s.sign_in(user));
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
