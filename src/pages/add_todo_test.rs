use super::*;

#[test]
fn validate_new_todo_trims_the_title() {
    let payload = validate_new_todo("  Groceries  ", DEFAULT_COLOR, DEFAULT_TEXT_COLOR).unwrap();
    assert_eq!(
        payload,
        MainTodoPayload {
            title: "Groceries".to_owned(),
            color: "#10b981".to_owned(),
            text_color: "#ffffff".to_owned(),
        }
    );
}

#[test]
fn validate_new_todo_rejects_a_blank_title() {
    assert_eq!(validate_new_todo("", DEFAULT_COLOR, DEFAULT_TEXT_COLOR), Err("Title is required"));
    assert_eq!(
        validate_new_todo("   ", DEFAULT_COLOR, DEFAULT_TEXT_COLOR),
        Err("Title is required")
    );
}

#[test]
fn validate_new_todo_passes_chosen_colors_through() {
    let payload = validate_new_todo("Reading list", "#123456", "#abcdef").unwrap();
    assert_eq!(payload.color, "#123456");
    assert_eq!(payload.text_color, "#abcdef");
}
