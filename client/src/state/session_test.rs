use super::*;

fn alice() -> User {
    User { id: "u1".to_owned(), email: "alice@example.com".to_owned() }
}

#[test]
fn session_default_has_no_user() {
    let state = SessionState::default();
    assert!(state.user().is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn set_user_populates_session() {
    let mut state = SessionState::default();
    state.set_user(alice());
    assert_eq!(state.user(), Some(&alice()));
    assert!(state.is_authenticated());
}

#[test]
fn set_user_replaces_previous_user() {
    let mut state = SessionState::default();
    state.set_user(alice());
    state.set_user(User { id: "u2".to_owned(), email: "bob@example.com".to_owned() });
    assert_eq!(state.user().map(|u| u.id.as_str()), Some("u2"));
}

#[test]
fn clear_removes_user() {
    let mut state = SessionState::default();
    state.set_user(alice());
    state.clear();
    assert!(!state.is_authenticated());
}
