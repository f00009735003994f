use super::*;

fn form(email: &str, password: &str, confirm: &str) -> FormState<SignupField> {
    let mut form = FormState::new();
    form.set_value(SignupField::Email, email);
    form.set_value(SignupField::Password, password);
    form.set_value(SignupField::ConfirmPassword, confirm);
    form
}

// =============================================================
// Password policy
// =============================================================

#[test]
fn policy_reports_each_rule() {
    assert_eq!(
        PasswordPolicyResult::evaluate("abc"),
        PasswordPolicyResult { length_ok: false, has_digit: false, has_special_char: false }
    );
    assert_eq!(
        PasswordPolicyResult::evaluate("Password1!"),
        PasswordPolicyResult { length_ok: true, has_digit: true, has_special_char: true }
    );
    assert!(PasswordPolicyResult::evaluate("Password1!").all_ok());
}

#[test]
fn length_counts_characters_not_bytes() {
    assert!(!PasswordPolicyResult::evaluate("ñññññññ").length_ok);
    assert!(PasswordPolicyResult::evaluate("ññññññññ").length_ok);
}

#[test]
fn only_listed_punctuation_counts_as_special() {
    assert!(PasswordPolicyResult::evaluate("a\"b").has_special_char);
    assert!(!PasswordPolicyResult::evaluate("a-b_c").has_special_char);
}

#[test]
fn all_failing_reports_length_only() {
    assert_eq!(PasswordPolicyResult::evaluate("abc").error(), Some(PASSWORD_TOO_SHORT));
}

#[test]
fn later_rules_mask_earlier_ones() {
    // Long enough, missing digit and special: special masks digit.
    assert_eq!(PasswordPolicyResult::evaluate("abcdefgh").error(), Some(PASSWORD_NEEDS_SPECIAL));
    // Long enough with special, missing digit.
    assert_eq!(PasswordPolicyResult::evaluate("abcdefg!").error(), Some(PASSWORD_NEEDS_DIGIT));
    // Short with digit and special.
    assert_eq!(PasswordPolicyResult::evaluate("a1!").error(), Some(PASSWORD_TOO_SHORT));
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn email_shape_accepts_loose_addresses() {
    assert!(looks_like_email("a@b.c"));
    assert!(looks_like_email("first.last@sub.example.org"));
    assert!(looks_like_email("contact: a@b.c"));
}

#[test]
fn email_shape_rejects_missing_parts() {
    for input in ["", "plain", "@b.c", "a@.c", "a@b.", "a@b", "a @b.c", "a.b@c"] {
        assert!(!looks_like_email(input), "{input:?} should be rejected");
    }
}

// =============================================================
// Signup form
// =============================================================

#[test]
fn valid_signup_has_no_errors() {
    assert!(validate_signup(&form("ana@example.com", "Password1!", "Password1!")).is_empty());
}

#[test]
fn weak_password_yields_single_length_error() {
    let errors = validate_signup(&form("ana@example.com", "abc", "abc"));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(&SignupField::Password).map(String::as_str), Some(PASSWORD_TOO_SHORT));
}

#[test]
fn empty_form_reports_required_fields() {
    let errors = validate_signup(&FormState::new());
    assert_eq!(errors.get(&SignupField::Email).map(String::as_str), Some(EMAIL_REQUIRED));
    assert_eq!(errors.get(&SignupField::Password).map(String::as_str), Some(PASSWORD_REQUIRED));
    assert_eq!(errors.get(&SignupField::ConfirmPassword), None);
}

#[test]
fn malformed_email_and_mismatch_are_reported_per_field() {
    let errors = validate_signup(&form("not-an-email", "Password1!", "Password2!"));
    assert_eq!(errors.get(&SignupField::Email).map(String::as_str), Some(EMAIL_INVALID));
    assert_eq!(errors.get(&SignupField::ConfirmPassword).map(String::as_str), Some(PASSWORDS_DIFFER));
    assert_eq!(errors.get(&SignupField::Password), None);
}
