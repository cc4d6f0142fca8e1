use super::*;
use crate::net::types::User;

fn signed_in() -> SessionState {
    let mut state = SessionState::default();
    state.set_user(User { id: "u1".to_owned(), email: "alice@example.com".to_owned() });
    state
}

#[test]
fn redirects_when_token_missing() {
    assert_eq!(guard_decision(None, &signed_in()), GuardDecision::RedirectToLogin);
}

#[test]
fn redirects_when_token_empty() {
    assert_eq!(guard_decision(Some(""), &signed_in()), GuardDecision::RedirectToLogin);
}

#[test]
fn redirects_when_user_missing() {
    assert_eq!(guard_decision(Some("abc"), &SessionState::default()), GuardDecision::RedirectToLogin);
}

#[test]
fn redirects_when_both_missing() {
    assert_eq!(guard_decision(None, &SessionState::default()), GuardDecision::RedirectToLogin);
}

#[test]
fn authorizes_with_token_and_user() {
    assert_eq!(guard_decision(Some("abc"), &signed_in()), GuardDecision::Authorized);
}

#[test]
fn children_hidden_while_checking() {
    assert!(!renders_children(None));
}

#[test]
fn children_hidden_on_redirect() {
    assert!(!renders_children(Some(GuardDecision::RedirectToLogin)));
}

#[test]
fn children_render_once_authorized() {
    assert!(renders_children(Some(GuardDecision::Authorized)));
}

#[test]
fn routes_are_stable() {
    assert_eq!(LOGIN_ROUTE, "/login");
    assert_eq!(REGISTER_ROUTE, "/register");
    assert_eq!(HOME_ROUTE, "/");
}
