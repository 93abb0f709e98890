use super::*;

#[test]
fn escape_dismisses_dialog() {
    assert!(is_dismiss_key("Escape"));
}

#[test]
fn other_keys_keep_dialog_open() {
    for key in ["Enter", "Tab", " ", "escape", "Esc"] {
        assert!(!is_dismiss_key(key), "{key:?} should not dismiss");
    }
}
