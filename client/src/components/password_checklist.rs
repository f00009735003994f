//! Live password policy checklist shown under the signup password field.

#[cfg(test)]
#[path = "password_checklist_test.rs"]
mod password_checklist_test;

use leptos::prelude::*;

use crate::util::validation::PasswordPolicyResult;

/// Label and pass/fail for each rule, in display order.
pub fn checklist_items(policy: PasswordPolicyResult) -> [(&'static str, bool); 3] {
    [
        ("At least 8 characters", policy.length_ok),
        ("Contains a number", policy.has_digit),
        ("Contains a special character", policy.has_special_char),
    ]
}

/// Class of the checklist container; marked complete once every rule passes.
pub fn checklist_class(policy: PasswordPolicyResult) -> &'static str {
    if policy.all_ok() { "password-checklist password-checklist--complete" } else { "password-checklist" }
}

#[component]
pub fn PasswordChecklist(#[prop(into)] policy: Signal<PasswordPolicyResult>) -> impl IntoView {
    view! {
        <ul class=move || checklist_class(policy.get())>
            {move || {
                checklist_items(policy.get())
                    .into_iter()
                    .map(|(label, ok)| {
                        let class = if ok { "check check--met" } else { "check" };
                        let mark = if ok { "✓ " } else { "✗ " };
                        view! { <li class=class>{mark}{label}</li> }
                    })
                    .collect_view()
            }}
        </ul>
    }
}
