//! Internships page: listing, client-side search, details dialog, and apply.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rows are fetched once the host has supplied the backend settings. Search
//! filters the fetched rows in memory. "Apply Now" goes through the
//! [`ApplyGate`]: signed-out visitors get the auth modal first, and the
//! deferred application is submitted once sign-in succeeds.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch is logged, toasted, and leaves the listing empty. A failed
//! submit is logged and toasted; there is no retry.

#[cfg(test)]
#[path = "internships_test.rs"]
mod internships_test;

use leptos::prelude::*;
use listings::{ApplyGate, BackendConfig, GateAction, Session};

use crate::components::auth_modal::AuthModal;
use crate::components::footer::Footer;
use crate::components::internship_card::InternshipCard;
use crate::components::internship_dialog::InternshipDialog;
use crate::components::nav_bar::NavBar;
use crate::components::toaster::show_toast;
use crate::state::auth::AuthState;
use crate::state::backend::BackendState;
use crate::state::internships::InternshipsState;
use crate::state::toast::{ToastState, ToastVariant};

pub const ERROR_TITLE: &str = "Error";
pub const LOAD_FAILED: &str = "Failed to load internships";
pub const SUBMIT_FAILED: &str = "Failed to submit application";
pub const SUBMITTED_TITLE: &str = "Application submitted";
pub const SUBMITTED_DESCRIPTION: &str = "Your application has been sent.";

/// Count line above the grid.
pub(crate) fn result_summary(count: usize, query: &str) -> String {
    let query = query.trim();
    let noun = if count == 1 { "internship" } else { "internships" };
    if query.is_empty() {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun} matching \"{query}\"")
    }
}

/// Placeholder shown when the grid has nothing to render.
pub(crate) fn empty_message(query: &str, failed: bool) -> &'static str {
    if failed {
        "Internships could not be loaded."
    } else if query.trim().is_empty() {
        "No internships posted yet."
    } else {
        "No internships match your search."
    }
}

fn report_load_failure(state: RwSignal<InternshipsState>, toasts: RwSignal<ToastState>, message: &str) {
    #[cfg(feature = "hydrate")]
    log::error!("failed to load internships: {message}");
    state.update(|s| s.failed(message));
    show_toast(toasts, ERROR_TITLE, LOAD_FAILED, ToastVariant::Destructive);
}

fn load_internships(
    config: BackendConfig,
    session: Option<Session>,
    state: RwSignal<InternshipsState>,
    toasts: RwSignal<ToastState>,
) {
    state.update(|s| s.loading = true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_internships(config, session).await {
            Ok(items) => state.update(|s| s.loaded(items)),
            Err(e) => report_load_failure(state, toasts, &e.to_string()),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, session, toasts);
    }
}

/// Submit an application for the current session.
///
/// Without backend settings nothing is sent and a failure toast is shown.
fn submit_application(
    internship_id: String,
    backend: RwSignal<BackendState>,
    auth: RwSignal<AuthState>,
    state: RwSignal<InternshipsState>,
    toasts: RwSignal<ToastState>,
) {
    let Some(config) = backend.get_untracked().config().cloned() else {
        show_toast(toasts, ERROR_TITLE, SUBMIT_FAILED, ToastVariant::Destructive);
        return;
    };
    let session = auth.get_untracked().session;
    state.update(|s| s.submitting = true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::submit_application(config, session, internship_id).await;
        state.update(|s| s.submitting = false);
        match result {
            Ok(()) => {
                state.update(|s| s.selected_id = None);
                show_toast(toasts, SUBMITTED_TITLE, SUBMITTED_DESCRIPTION, ToastVariant::Default);
            }
            Err(e) => {
                log::error!("failed to submit application: {e}");
                show_toast(toasts, ERROR_TITLE, SUBMIT_FAILED, ToastVariant::Destructive);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, session, internship_id);
        state.update(|s| s.submitting = false);
    }
}

#[component]
pub fn InternshipsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let backend = expect_context::<RwSignal<BackendState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let state = RwSignal::new(InternshipsState::loading());
    let gate = RwSignal::new(ApplyGate::new());
    let show_auth = RwSignal::new(false);

    // Fetch once the backend settings are known.
    Effect::new(move || match backend.get() {
        BackendState::Loading => {}
        BackendState::Ready(config) => {
            load_internships(config, auth.get_untracked().session, state, toasts);
        }
        BackendState::Unavailable(message) => report_load_failure(state, toasts, &message),
    });

    let submit = Callback::new(move |internship_id: String| {
        submit_application(internship_id, backend, auth, state, toasts);
    });

    let on_apply = Callback::new(move |internship_id: String| {
        let signed_in = auth.get_untracked().is_signed_in();
        match gate.try_update(|g| g.request(&internship_id, signed_in)) {
            Some(GateAction::Submit(id)) => submit.run(id),
            Some(GateAction::PromptAuth) => show_auth.set(true),
            None => {}
        }
    });

    let on_auth_success = Callback::new(move |()| {
        show_auth.set(false);
        if let Some(id) = gate.try_update(ApplyGate::auth_completed).flatten() {
            submit.run(id);
        }
    });

    let on_auth_close = Callback::new(move |()| {
        show_auth.set(false);
        gate.update(ApplyGate::auth_dismissed);
    });

    let on_sign_in = Callback::new(move |()| show_auth.set(true));
    let on_open = Callback::new(move |id: String| state.update(|s| s.selected_id = Some(id)));
    let on_close_details = Callback::new(move |()| state.update(|s| s.selected_id = None));

    let selected = Memo::new(move |_| state.with(|s| s.selected().cloned()));
    let submitting = Signal::derive(move || state.with(|s| s.submitting));

    view! {
        <div class="internships-page">
            <NavBar on_sign_in=on_sign_in/>

            <main class="internships-page__main">
                <section class="internships-page__hero">
                    <h1>"Find your internship"</h1>
                    <p>"Browse open positions and apply in one click."</p>
                    <input
                        class="search-input"
                        type="search"
                        placeholder="Search by title, company, or keyword"
                        prop:value=move || state.with(|s| s.query.clone())
                        on:input=move |ev| {
                            let query = event_target_value(&ev);
                            state.update(|s| s.query = query);
                        }
                    />
                </section>

                <Show
                    when=move || !state.with(|s| s.loading)
                    fallback=|| view! { <p class="internships-page__status">"Loading internships..."</p> }
                >
                    <ListingGrid state=state on_open=on_open/>
                </Show>
            </main>

            <Footer/>

            {move || {
                selected
                    .get()
                    .map(|internship| {
                        view! {
                            <InternshipDialog
                                internship=internship
                                submitting=submitting
                                on_apply=on_apply
                                on_close=on_close_details
                            />
                        }
                    })
            }}

            <Show when=move || show_auth.get()>
                <AuthModal on_success=on_auth_success on_close=on_auth_close/>
            </Show>
        </div>
    }
}

/// Result count plus the card grid or an empty-state message.
#[component]
fn ListingGrid(state: RwSignal<InternshipsState>, on_open: Callback<String>) -> impl IntoView {
    let visible = Memo::new(move |_| state.with(InternshipsState::visible));
    let query = move || state.with(|s| s.query.clone());
    let failed = move || state.with(|s| s.error.is_some());

    view! {
        <p class="internships-page__count">
            {move || result_summary(visible.with(Vec::len), &query())}
        </p>
        <Show
            when=move || !visible.with(Vec::is_empty)
            fallback=move || {
                view! {
                    <p class="internships-page__empty">{move || empty_message(&query(), failed())}</p>
                }
            }
        >
            <div class="internships-page__grid">
                <For
                    each=move || visible.get()
                    key=|internship| internship.id.clone()
                    children=move |internship| {
                        view! { <InternshipCard internship=internship on_open=on_open/> }
                    }
                />
            </div>
        </Show>
    }
}
