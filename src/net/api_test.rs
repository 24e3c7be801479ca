use super::*;

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("tok-1"), "Bearer tok-1");
}

#[test]
fn main_todo_endpoint_formats_expected_path() {
    assert_eq!(main_todo_endpoint("64abc"), "/main-todo/64abc");
}

#[test]
fn sub_todos_endpoint_serves_both_slug_and_id_lookups() {
    assert_eq!(sub_todos_endpoint("groceries"), "/subtodos/groceries");
    assert_eq!(sub_todos_endpoint("64abc"), "/subtodos/64abc");
}

#[test]
fn status_failure_message_formats_status() {
    assert_eq!(status_failure_message(500), "request failed: 500");
}

#[test]
fn session_rejection_needs_both_a_bearer_request_and_a_401() {
    assert!(is_session_rejection(401, true));
    assert!(!is_session_rejection(401, false));
    assert!(!is_session_rejection(403, true));
    assert!(!is_session_rejection(200, true));
}

#[test]
fn rejected_login_credentials_surface_the_server_error() {
    // A 401 without a bearer token falls through to the envelope, so the
    // user sees the server's verdict instead of a session-expired warning.
    let envelope: ApiEnvelope<AuthData> =
        serde_json::from_str(r#"{ "success": false, "error": "Invalid OTP" }"#).unwrap();
    assert!(!is_session_rejection(401, false));
    assert_eq!(envelope_data(envelope), Err(ApiError::Request("Invalid OTP".to_owned())));
}

#[test]
fn failure_message_prefers_error_over_message() {
    assert_eq!(
        failure_message(Some("Invalid OTP".to_owned()), Some("verification".to_owned())),
        "Invalid OTP"
    );
    assert_eq!(failure_message(None, Some("No user found".to_owned())), "No user found");
    assert_eq!(failure_message(None, None), "Request failed");
}

#[test]
fn envelope_data_unwraps_success_payload() {
    let envelope = ApiEnvelope {
        success: true,
        data: Some(7),
        message: None,
        error: None,
    };
    assert_eq!(envelope_data(envelope), Ok(7));
}

#[test]
fn envelope_data_surfaces_server_error() {
    let envelope: ApiEnvelope<i32> = ApiEnvelope {
        success: false,
        data: None,
        message: None,
        error: Some("Invalid OTP".to_owned()),
    };
    assert_eq!(envelope_data(envelope), Err(ApiError::Request("Invalid OTP".to_owned())));
}

#[test]
fn envelope_data_rejects_success_without_payload() {
    let envelope: ApiEnvelope<i32> = ApiEnvelope {
        success: true,
        data: None,
        message: None,
        error: None,
    };
    assert!(matches!(envelope_data(envelope), Err(ApiError::Network(_))));
}

#[test]
fn envelope_ack_passes_message_through() {
    let envelope: ApiEnvelope<serde_json::Value> = ApiEnvelope {
        success: true,
        data: None,
        message: Some("Todo deleted".to_owned()),
        error: None,
    };
    assert_eq!(envelope_ack(envelope), Ok(Some("Todo deleted".to_owned())));
}

#[test]
fn envelope_ack_surfaces_failure() {
    let envelope: ApiEnvelope<serde_json::Value> = ApiEnvelope {
        success: false,
        data: None,
        message: Some("Update failed".to_owned()),
        error: None,
    };
    assert_eq!(envelope_ack(envelope), Err(ApiError::Request("Update failed".to_owned())));
}

#[test]
fn api_error_display_is_user_presentable() {
    assert_eq!(ApiError::Unauthorized.to_string(), "session expired, please log in again");
    assert_eq!(ApiError::Request("Invalid OTP".to_owned()).to_string(), "Invalid OTP");
    assert_eq!(ApiError::Timeout.to_string(), "request timed out");
    assert_eq!(
        ApiError::Network("fetch failed".to_owned()).to_string(),
        "network error: fetch failed"
    );
}
