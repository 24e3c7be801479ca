use super::*;

fn stored(expires_at_ms: i64) -> StoredSession {
    StoredSession {
        token: "tok-1".to_owned(),
        user: User {
            id: "u1".to_owned(),
            fullname: "Ada Lovelace".to_owned(),
            username: "ada".to_owned(),
            email: "a@b.com".to_owned(),
        },
        expires_at_ms,
    }
}

#[test]
fn expiry_is_twenty_four_hours_out() {
    assert_eq!(expiry_after(0), 86_400_000);
    assert_eq!(expiry_after(1_000), 86_401_000);
}

#[test]
fn session_is_live_strictly_before_expiry() {
    let record = stored(1_000);
    assert!(is_live(&record, 999));
    assert!(!is_live(&record, 1_000));
    assert!(!is_live(&record, 1_001));
}

#[test]
fn load_is_empty_outside_the_browser() {
    assert!(load().is_none());
}

#[test]
fn stored_session_round_trips_through_json() {
    let record = stored(86_400_000);
    let raw = serde_json::to_string(&record).unwrap();
    let back: StoredSession = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, record);
}
