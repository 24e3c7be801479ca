use super::*;

#[test]
fn main_todo_deserializes_wire_field_names() {
    let raw = r##"{
        "_id": "64abc",
        "title": "Groceries",
        "slug": "groceries",
        "color": "#10b981",
        "textColor": "#ffffff",
        "createdAt": "2026-01-02T17:04:00Z"
    }"##;
    let todo: MainTodo = serde_json::from_str(raw).unwrap();
    assert_eq!(todo.id, "64abc");
    assert_eq!(todo.text_color, "#ffffff");
    assert_eq!(todo.created_at, "2026-01-02T17:04:00Z");
}

#[test]
fn main_todo_accepts_plain_id_alias() {
    let raw = r##"{
        "id": "64abc",
        "title": "Groceries",
        "slug": "groceries",
        "color": "#10b981",
        "textColor": "#ffffff",
        "createdAt": "2026-01-02T17:04:00Z"
    }"##;
    let todo: MainTodo = serde_json::from_str(raw).unwrap();
    assert_eq!(todo.id, "64abc");
}

#[test]
fn sub_todo_defaults_missing_comment_and_slug() {
    let raw = r##"{
        "_id": "s1",
        "taskName": "Buy milk",
        "color": "#ffffff",
        "textColor": "#000000",
        "complete": false,
        "createdAt": "2026-01-02T17:04:00Z"
    }"##;
    let todo: SubTodo = serde_json::from_str(raw).unwrap();
    assert_eq!(todo.comment, "");
    assert_eq!(todo.slug, "");
    assert!(!todo.complete);
}

#[test]
fn envelope_parses_data_payload() {
    let raw = r#"{ "success": true, "data": [1, 2, 3] }"#;
    let envelope: ApiEnvelope<Vec<i32>> = serde_json::from_str(raw).unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.data, Some(vec![1, 2, 3]));
    assert_eq!(envelope.message, None);
}

#[test]
fn envelope_accepts_tasks_alias_for_data() {
    let raw = r#"{ "success": true, "tasks": ["a"], "message": "ok" }"#;
    let envelope: ApiEnvelope<Vec<String>> = serde_json::from_str(raw).unwrap();
    assert_eq!(envelope.data, Some(vec!["a".to_owned()]));
    assert_eq!(envelope.message.as_deref(), Some("ok"));
}

#[test]
fn envelope_parses_failure_without_data() {
    let raw = r#"{ "success": false, "error": "Invalid OTP" }"#;
    let envelope: ApiEnvelope<AuthData> = serde_json::from_str(raw).unwrap();
    assert!(!envelope.success);
    assert!(envelope.data.is_none());
    assert_eq!(envelope.error.as_deref(), Some("Invalid OTP"));
}

#[test]
fn auth_data_deserializes_access_token() {
    let raw = r##"{
        "accessToken": "tok-1",
        "user": { "_id": "u1", "fullname": "Ada", "username": "ada", "email": "a@b.com" }
    }"##;
    let auth: AuthData = serde_json::from_str(raw).unwrap();
    assert_eq!(auth.access_token, "tok-1");
    assert_eq!(auth.user.username, "ada");
}

#[test]
fn sub_todo_payload_serializes_camel_case() {
    let payload = SubTodoPayload {
        task_name: "Buy milk".to_owned(),
        comment: String::new(),
        color: "#ffffff".to_owned(),
        text_color: "#000000".to_owned(),
        complete: true,
        slug: "groceries".to_owned(),
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["taskName"], "Buy milk");
    assert_eq!(value["textColor"], "#000000");
    assert_eq!(value["slug"], "groceries");
}

#[test]
fn main_todo_payload_serializes_camel_case() {
    let payload = MainTodoPayload {
        title: "Groceries".to_owned(),
        color: "#10b981".to_owned(),
        text_color: "#ffffff".to_owned(),
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["textColor"], "#ffffff");
    assert!(value.get("text_color").is_none());
}
