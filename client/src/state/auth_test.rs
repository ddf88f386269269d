use super::*;

#[test]
fn auth_state_default_not_loading_no_user() {
    let state = AuthState::default();
    assert!(!state.loading);
    assert!(state.user.is_none());
    assert_eq!(state.role(), None);
}

#[test]
fn loading_state_has_no_user() {
    let state = AuthState::loading();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn role_and_name_come_from_user() {
    let state = AuthState {
        user: Some(User { id: 1, username: "mgray".to_owned(), role: Role::Supervisor, ..User::default() }),
        loading: false,
    };
    assert_eq!(state.role(), Some(Role::Supervisor));
    assert_eq!(state.display_name(), "mgray");
    assert_eq!(AuthState::default().display_name(), "—");
}
