use super::*;

#[test]
fn push_appends_in_order_with_unique_ids() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Success, "Todo added!".to_owned());
    let second = state.push(ToastKind::Error, "Update failed".to_owned());
    assert_ne!(first, second);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].message, "Todo added!");
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Info, "one".to_owned());
    let _second = state.push(ToastKind::Info, "two".to_owned());
    state.dismiss(&first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "two");
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.push(ToastKind::Warning, "one".to_owned());
    state.dismiss("missing");
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn css_class_maps_each_kind() {
    assert_eq!(ToastKind::Success.css_class(), "toast--success");
    assert_eq!(ToastKind::Info.css_class(), "toast--info");
    assert_eq!(ToastKind::Warning.css_class(), "toast--warning");
    assert_eq!(ToastKind::Error.css_class(), "toast--error");
}
