use super::*;

fn user() -> User {
    User {
        id: "u1".to_owned(),
        fullname: "Ada Lovelace".to_owned(),
        username: "ada".to_owned(),
        email: "a@b.com".to_owned(),
    }
}

#[test]
fn default_state_has_no_session() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert_eq!(state.token(), None);
}

#[test]
fn from_storage_is_empty_outside_the_browser() {
    let state = SessionState::from_storage();
    assert!(state.session.is_none());
}

#[test]
fn token_reads_through_to_session() {
    let state = SessionState {
        session: Some(Session {
            token: "tok-1".to_owned(),
            user: user(),
        }),
    };
    assert!(state.is_authenticated());
    assert_eq!(state.token().as_deref(), Some("tok-1"));
}
