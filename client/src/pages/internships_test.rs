use listings::Internship;

use super::*;
use crate::state::toast::Toast;

// =============================================================
// result_summary
// =============================================================

#[test]
fn summary_without_query_counts_all() {
    assert_eq!(result_summary(0, ""), "0 internships");
    assert_eq!(result_summary(1, "  "), "1 internship");
    assert_eq!(result_summary(12, ""), "12 internships");
}

#[test]
fn summary_with_query_quotes_trimmed_query() {
    assert_eq!(result_summary(2, "  rust "), "2 internships matching \"rust\"");
    assert_eq!(result_summary(1, "acme"), "1 internship matching \"acme\"");
}

// =============================================================
// empty_message
// =============================================================

#[test]
fn empty_message_prefers_failure() {
    assert_eq!(empty_message("rust", true), "Internships could not be loaded.");
}

#[test]
fn empty_message_distinguishes_search() {
    assert_eq!(empty_message("", false), "No internships posted yet.");
    assert_eq!(empty_message("rust", false), "No internships match your search.");
}

// =============================================================
// Failure paths
// =============================================================

fn internship(id: &str) -> Internship {
    Internship {
        id: id.to_owned(),
        title: "Backend Intern".to_owned(),
        company: "Acme".to_owned(),
        description: None,
        duration: None,
        created_at: None,
    }
}

fn only_toast(toasts: RwSignal<ToastState>) -> Toast {
    let queued = toasts.get_untracked().toasts;
    assert_eq!(queued.len(), 1, "expected exactly one toast, got {queued:?}");
    queued[0].clone()
}

#[test]
fn load_failure_empties_listing_and_shows_error_toast() {
    let state = RwSignal::new(InternshipsState::loading());
    state.update(|s| {
        s.loaded(vec![internship("1")]);
        s.selected_id = Some("1".to_owned());
    });
    let toasts = RwSignal::new(ToastState::default());

    report_load_failure(state, toasts, "connection refused");

    let after = state.get_untracked();
    assert!(after.items.is_empty());
    assert!(!after.loading);
    assert_eq!(after.error.as_deref(), Some("connection refused"));
    assert!(after.selected_id.is_none());

    let toast = only_toast(toasts);
    assert_eq!(toast.title, "Error");
    assert_eq!(toast.description, "Failed to load internships");
    assert_eq!(toast.variant, ToastVariant::Destructive);
}

#[test]
fn submit_without_backend_settings_shows_error_toast() {
    let backend = RwSignal::new(BackendState::Unavailable("offline".to_owned()));
    let auth = RwSignal::new(AuthState::default());
    let state = RwSignal::new(InternshipsState::default());
    state.update(|s| s.loaded(vec![internship("7")]));
    let toasts = RwSignal::new(ToastState::default());

    submit_application("7".to_owned(), backend, auth, state, toasts);

    let after = state.get_untracked();
    assert!(!after.submitting);
    assert_eq!(after.items.len(), 1, "a failed submit keeps the listing");

    let toast = only_toast(toasts);
    assert_eq!(toast.title, "Error");
    assert_eq!(toast.description, "Failed to submit application");
    assert_eq!(toast.variant, ToastVariant::Destructive);
}

#[test]
fn submit_with_backend_settings_does_not_toast_failure() {
    let config = BackendConfig::new("https://project.example.co", "anon").unwrap();
    let backend = RwSignal::new(BackendState::Ready(config));
    let auth = RwSignal::new(AuthState::default());
    let state = RwSignal::new(InternshipsState::default());
    let toasts = RwSignal::new(ToastState::default());

    submit_application("7".to_owned(), backend, auth, state, toasts);

    assert!(!state.get_untracked().submitting);
    assert!(toasts.get_untracked().toasts.is_empty());
}
