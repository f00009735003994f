use super::*;
use crate::util::credentials::ACCEPTED;

#[test]
fn accepted_pair_signs_in_and_redirects_to_map() {
    let owner = Owner::new();
    owner.with(|| {
        let session = SessionContext::new();
        let outcome = submit_login(session, ACCEPTED.email, ACCEPTED.password);
        assert_eq!(outcome, LoginOutcome::Accepted { redirect: "/map" });
        assert_eq!(session.user().as_deref(), Some(ACCEPTED.email));
    });
}

#[test]
fn wrong_password_leaves_session_unauthenticated() {
    let owner = Owner::new();
    owner.with(|| {
        let session = SessionContext::new();
        let outcome = submit_login(session, ACCEPTED.email, "nope");
        assert_eq!(outcome, LoginOutcome::Rejected(LoginError::InvalidCredentials));
        assert!(!session.is_authenticated());
    });
}

#[test]
fn wrong_email_and_wrong_password_give_the_same_error() {
    let owner = Owner::new();
    owner.with(|| {
        let session = SessionContext::new();
        let bad_email = submit_login(session, "someone@example.com", ACCEPTED.password);
        let bad_password = submit_login(session, ACCEPTED.email, "password");
        assert_eq!(bad_email, bad_password);
        assert!(!session.is_authenticated());
    });
}
