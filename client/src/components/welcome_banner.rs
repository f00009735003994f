//! Greeting for the signed-in user.

#[cfg(test)]
#[path = "welcome_banner_test.rs"]
mod welcome_banner_test;

use leptos::prelude::*;

use crate::state::session::SessionContext;

pub fn welcome_message(user: &str) -> String {
    format!("Welcome, {user}!")
}

/// Renders nothing until the session has a user.
#[component]
pub fn WelcomeBanner() -> impl IntoView {
    let session = SessionContext::expect();
    view! {
        <Show when=move || session.is_authenticated()>
            <p class="welcome-banner">{move || session.user().map(|u| welcome_message(&u)).unwrap_or_default()}</p>
        </Show>
    }
}
