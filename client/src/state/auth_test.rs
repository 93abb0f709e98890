use super::*;
use listings::AuthUser;

fn signed_in() -> AuthState {
    AuthState {
        session: Some(Session {
            access_token: "jwt".to_owned(),
            refresh_token: None,
            expires_at: None,
            user: AuthUser { id: "u1".to_owned(), email: Some("ada@example.com".to_owned()) },
        }),
        loading: false,
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_session() {
    let state = AuthState::default();
    assert!(state.session.is_none());
    assert!(!state.is_signed_in());
    assert_eq!(state.display_name(), None);
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

// =============================================================
// Signed-in accessors
// =============================================================

#[test]
fn signed_in_exposes_user() {
    let state = signed_in();
    assert!(state.is_signed_in());
    assert_eq!(state.session.as_ref().map(|s| s.user.id.as_str()), Some("u1"));
    assert_eq!(state.display_name(), Some("ada@example.com"));
}
