use super::*;

#[test]
fn items_follow_policy() {
    let items = checklist_items(PasswordPolicyResult::evaluate("abcdefg1"));
    assert_eq!(
        items,
        [
            ("At least 8 characters", true),
            ("Contains a number", true),
            ("Contains a special character", false),
        ]
    );
}

#[test]
fn empty_password_fails_everything() {
    assert!(checklist_items(PasswordPolicyResult::evaluate("")).iter().all(|(_, ok)| !ok));
}

#[test]
fn list_is_complete_only_when_every_rule_passes() {
    assert_eq!(checklist_class(PasswordPolicyResult::evaluate("abcdefg1")), "password-checklist");
    assert_eq!(
        checklist_class(PasswordPolicyResult::evaluate("abcdefg1!")),
        "password-checklist password-checklist--complete"
    );
}
