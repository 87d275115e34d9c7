use super::*;

fn sample_user() -> User {
    User {
        id: "u-1".to_owned(),
        email: "admin@agency.example".to_owned(),
    }
}

#[test]
fn login_sets_token_and_user() {
    login("tok-123".to_owned(), sample_user());
    assert!(is_authenticated());
    assert_eq!(token().as_deref(), Some("tok-123"));
    assert_eq!(user().map(|u| u.email), Some("admin@agency.example".to_owned()));
}

#[test]
fn logout_clears_everything() {
    login("tok-123".to_owned(), sample_user());
    logout();
    assert!(!is_authenticated());
    assert!(token().is_none());
    assert!(user().is_none());
}

#[test]
fn default_state_is_unauthenticated() {
    assert!(!is_authenticated());
    assert!(token().is_none());
}

#[test]
fn restore_without_persisted_state_keeps_session_empty() {
    restore();
    assert!(!is_authenticated());
}

#[test]
fn session_round_trips_through_json() {
    let session = Session {
        token: Some("tok".to_owned()),
        user: Some(sample_user()),
    };
    let raw = serde_json::to_string(&session).unwrap();
    let back: Session = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, session);
}
