use super::*;

#[test]
fn main_todos_default_to_loading_and_empty() {
    let state = MainTodosState::default();
    assert!(state.loading);
    assert!(state.items.is_empty());
}

#[test]
fn sub_todos_default_to_loading_and_empty() {
    let state = SubTodosState::default();
    assert!(state.loading);
    assert!(state.items.is_empty());
}
