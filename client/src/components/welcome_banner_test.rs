use super::*;

#[test]
fn message_names_the_user() {
    assert_eq!(welcome_message("ana@example.com"), "Welcome, ana@example.com!");
}
