use super::*;

#[test]
fn toast_state_default_empty() {
    let state = ToastState::default();
    assert!(state.toasts.is_empty());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push("A", "first", ToastVariant::Default);
    let b = state.push("B", "second", ToastVariant::Destructive);
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[1].variant, ToastVariant::Destructive);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push("A", "", ToastVariant::Default);
    let b = state.push("B", "", ToastVariant::Default);
    state.dismiss(a);
    assert_eq!(state.toasts.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn push_past_cap_drops_oldest() {
    let mut state = ToastState::default();
    for n in 0..5 {
        state.push(&format!("T{n}"), "", ToastVariant::Default);
    }
    assert_eq!(state.toasts.len(), MAX_TOASTS);
    assert_eq!(state.toasts[0].title, "T2");
    assert_eq!(state.toasts[2].title, "T4");
}

#[test]
fn variant_css_modifiers_are_distinct() {
    assert_eq!(ToastVariant::default(), ToastVariant::Default);
    assert_ne!(ToastVariant::Default.css_modifier(), ToastVariant::Destructive.css_modifier());
}
