use super::*;

fn sample_todo() -> MainTodo {
    MainTodo {
        id: "665f1".to_owned(),
        title: "Groceries".to_owned(),
        slug: "groceries".to_owned(),
        color: "#10b981".to_owned(),
        text_color: "#ffffff".to_owned(),
        created_at: "2026-08-01T09:30:00.000Z".to_owned(),
    }
}

#[test]
fn edit_form_prepopulates_from_the_target_todo() {
    let form = EditTodoForm::from_todo(&sample_todo());
    assert_eq!(form.id, "665f1");
    assert_eq!(form.title, "Groceries");
    assert_eq!(form.color, "#10b981");
    assert_eq!(form.text_color, "#ffffff");
}

#[test]
fn edit_form_payload_trims_the_title() {
    let mut form = EditTodoForm::from_todo(&sample_todo());
    form.title = "  Groceries and more  ".to_owned();
    let payload = form.payload().unwrap();
    assert_eq!(payload.title, "Groceries and more");
    assert_eq!(payload.color, "#10b981");
    assert_eq!(payload.text_color, "#ffffff");
}

#[test]
fn edit_form_payload_rejects_an_empty_title() {
    let mut form = EditTodoForm::from_todo(&sample_todo());
    form.title = "   ".to_owned();
    assert_eq!(form.payload(), Err("Title is required"));
}

#[test]
fn edit_form_payload_allows_unchanged_fields() {
    let form = EditTodoForm::from_todo(&sample_todo());
    let payload = form.payload().unwrap();
    assert_eq!(payload.title, "Groceries");
}
