//! Login page checked against the hardcoded demo credentials.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only writer of the session. A match signs the user in and
//! navigates to the map; a mismatch shows one generic message and leaves the
//! typed values in place.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::form::{FormState, LoginField};
use crate::state::session::SessionContext;
use crate::util::credentials::{LoginError, check_credentials};
use crate::util::route_guard::AppRoute;

/// Result of submitting the login form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Session was set; go here next.
    Accepted { redirect: &'static str },
    Rejected(LoginError),
}

/// Check the submitted pair and, on a match, sign the user in.
pub fn submit_login(session: SessionContext, email: &str, password: &str) -> LoginOutcome {
    match check_credentials(email, password) {
        Ok(()) => {
            session.sign_in(email);
            LoginOutcome::Accepted { redirect: AppRoute::Map.path() }
        }
        Err(err) => LoginOutcome::Rejected(err),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = SessionContext::expect();
    let navigate = use_navigate();
    let form = RwSignal::new(FormState::<LoginField>::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let (email, password) = form.with_untracked(|f| {
            (f.value(LoginField::Email).to_owned(), f.value(LoginField::Password).to_owned())
        });
        match submit_login(session, &email, &password) {
            LoginOutcome::Accepted { redirect } => {
                #[cfg(feature = "hydrate")]
                log::info!("login accepted, redirecting to {redirect}");
                error.set(None);
                navigate(redirect, NavigateOptions::default());
            }
            LoginOutcome::Rejected(err) => {
                #[cfg(feature = "hydrate")]
                log::info!("login rejected");
                error.set(Some(err.to_string()));
            }
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Login"</h1>
                <label for="login-email">"Email"</label>
                <input
                    id="login-email"
                    class="auth-input"
                    type="email"
                    required=true
                    prop:value=move || form.with(|f| f.value(LoginField::Email).to_owned())
                    on:input=move |ev| form.update(|f| f.set_value(LoginField::Email, event_target_value(&ev)))
                />
                <label for="login-password">"Password"</label>
                <input
                    id="login-password"
                    class="auth-input"
                    type="password"
                    required=true
                    prop:value=move || form.with(|f| f.value(LoginField::Password).to_owned())
                    on:input=move |ev| form.update(|f| f.set_value(LoginField::Password, event_target_value(&ev)))
                />
                <Show when=move || error.with(Option::is_some)>
                    <p class="auth-error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="auth-button" type="submit">"Login"</button>
                <p class="auth-switch">
                    "Don't have an account? "
                    <A href=AppRoute::Signup.path()>"Sign up"</A>
                </p>
            </form>
        </div>
    }
}
