//! Signup page with client-side validation only.
//!
//! Nothing is persisted: a clean submit shows an acknowledgment and sends the
//! user back to login, where only the demo credentials work.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::password_checklist::PasswordChecklist;
use crate::state::form::{FormState, SignupField};
use crate::util::route_guard::AppRoute;
use crate::util::validation::{PasswordPolicyResult, validate_signup};

/// Acknowledgment shown after a clean submit.
pub const SIGNUP_SUCCESS: &str = "Signup successful! You can now log in.";

/// Result of submitting the signup form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignupOutcome {
    Accepted { redirect: &'static str },
    Rejected { fields: usize },
}

/// Validate `form` and store the resulting field errors on it.
pub fn submit_signup(form: &mut FormState<SignupField>) -> SignupOutcome {
    let errors = validate_signup(form);
    form.set_errors(errors);
    if form.has_errors() {
        SignupOutcome::Rejected { fields: form.errors().len() }
    } else {
        SignupOutcome::Accepted { redirect: AppRoute::Login.path() }
    }
}

fn acknowledge(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("signup acknowledgment failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

#[component]
fn FieldError(form: RwSignal<FormState<SignupField>>, field: SignupField) -> impl IntoView {
    view! {
        <Show when=move || form.with(|f| f.error(field).is_some())>
            <p class="auth-error">{move || form.with(|f| f.error(field).unwrap_or_default().to_owned())}</p>
        </Show>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();
    let form = RwSignal::new(FormState::<SignupField>::new());
    let policy = Memo::new(move |_| form.with(|f| PasswordPolicyResult::evaluate(f.value(SignupField::Password))));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(submit_signup) {
            Some(SignupOutcome::Accepted { redirect }) => {
                acknowledge(SIGNUP_SUCCESS);
                navigate(redirect, NavigateOptions::default());
            }
            Some(SignupOutcome::Rejected { fields }) => {
                #[cfg(feature = "hydrate")]
                log::info!("signup rejected with {fields} field error(s)");
                #[cfg(not(feature = "hydrate"))]
                let _ = fields;
            }
            None => {}
        }
    };

    let input = move |field: SignupField| {
        move |ev: leptos::ev::Event| form.update(|f| f.set_value(field, event_target_value(&ev)))
    };
    let value = move |field: SignupField| move || form.with(|f| f.value(field).to_owned());

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Sign up"</h1>
                <label for="signup-email">"Email"</label>
                <input
                    id="signup-email"
                    class="auth-input"
                    type="email"
                    required=true
                    prop:value=value(SignupField::Email)
                    on:input=input(SignupField::Email)
                />
                <FieldError form field=SignupField::Email/>
                <label for="signup-password">"Password"</label>
                <input
                    id="signup-password"
                    class="auth-input"
                    type="password"
                    required=true
                    prop:value=value(SignupField::Password)
                    on:input=input(SignupField::Password)
                />
                <PasswordChecklist policy/>
                <FieldError form field=SignupField::Password/>
                <label for="signup-confirm">"Confirm password"</label>
                <input
                    id="signup-confirm"
                    class="auth-input"
                    type="password"
                    required=true
                    prop:value=value(SignupField::ConfirmPassword)
                    on:input=input(SignupField::ConfirmPassword)
                />
                <FieldError form field=SignupField::ConfirmPassword/>
                <button class="auth-button" type="submit">"Sign up"</button>
                <p class="auth-switch">
                    "Already have an account? "
                    <A href=AppRoute::Login.path()>"Log in"</A>
                </p>
            </form>
        </div>
    }
}
