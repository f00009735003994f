use super::*;

fn signed_in() -> Session {
    let mut session = Session::default();
    session.sign_in("ana@example.com");
    session
}

#[test]
fn unauthenticated_map_redirects_to_login() {
    assert_eq!(decide(&Session::default(), AppRoute::Map), GuardDecision::Redirect("/"));
}

#[test]
fn authenticated_map_renders() {
    assert_eq!(decide(&signed_in(), AppRoute::Map), GuardDecision::Render);
}

#[test]
fn public_routes_always_render() {
    for session in [Session::default(), signed_in()] {
        assert_eq!(decide(&session, AppRoute::Login), GuardDecision::Render);
        assert_eq!(decide(&session, AppRoute::Signup), GuardDecision::Render);
    }
}

#[test]
fn paths_and_segments() {
    assert_eq!(AppRoute::Login.path(), "/");
    assert_eq!(AppRoute::Login.segment(), "");
    assert_eq!(AppRoute::Signup.segment(), "signup");
    assert_eq!(AppRoute::Map.path(), "/map");
}

#[test]
fn only_map_is_protected() {
    let protected: Vec<AppRoute> = AppRoute::ALL.into_iter().filter(|r| r.is_protected()).collect();
    assert_eq!(protected, vec![AppRoute::Map]);
}
