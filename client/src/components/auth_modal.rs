//! E-mail/password auth modal with sign-in and sign-up modes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened from the nav bar, or by the apply gate when a signed-out visitor
//! tries to apply. `on_success` fires only after a session has been stored,
//! which is what lets the page resume a deferred application.

#[cfg(test)]
#[path = "auth_modal_test.rs"]
mod auth_modal_test;

use leptos::prelude::*;
use listings::{BackendError, Credentials};

use crate::components::internship_dialog::{focus_on_mount, is_dismiss_key};
use crate::state::auth::AuthState;
use crate::state::backend::BackendState;
use crate::state::toast::ToastState;

/// Which auth action the form performs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Sign in",
            Self::SignUp => "Create an account",
        }
    }

    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign in",
            Self::SignUp => "Sign up",
        }
    }

    #[must_use]
    pub fn switch_prompt(self) -> &'static str {
        match self {
            Self::SignIn => "Need an account? Sign up",
            Self::SignUp => "Already have an account? Sign in",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }
}

/// Inline message for a failed auth call.
pub(crate) fn auth_error_message(error: &BackendError) -> String {
    match error {
        BackendError::Http { message, .. } => message.clone(),
        BackendError::Transport(_) => "Could not reach the server. Try again.".to_owned(),
        BackendError::InvalidConfig(_) => "Sign-in is not available right now.".to_owned(),
        BackendError::Decode(_) | BackendError::NotSignedIn => {
            "Unexpected response from the server.".to_owned()
        }
    }
}

#[component]
pub fn AuthModal(on_success: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let backend = expect_context::<RwSignal<BackendState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let mode = RwSignal::new(AuthMode::SignIn);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match Credentials::validate(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        let Some(config) = backend.get_untracked().config().cloned() else {
            error.set(Some(auth_error_message(&BackendError::InvalidConfig(String::new()))));
            return;
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            use crate::components::toaster::show_toast;
            use crate::state::toast::ToastVariant;
            use listings::SignUpOutcome;

            let current_mode = mode.get_untracked();
            leptos::task::spawn_local(async move {
                let result = match current_mode {
                    AuthMode::SignIn => crate::net::api::sign_in(config, credentials).await.map(SignUpOutcome::SignedIn),
                    AuthMode::SignUp => crate::net::api::sign_up(config, credentials).await,
                };
                busy.set(false);
                match result {
                    Ok(SignUpOutcome::SignedIn(session)) => {
                        crate::util::session_store::save(&session);
                        show_toast(toasts, "Signed in", session.display_name(), ToastVariant::Default);
                        auth.set(AuthState { session: Some(session), loading: false });
                        on_success.run(());
                    }
                    Ok(SignUpOutcome::ConfirmationRequired { email }) => {
                        show_toast(
                            toasts,
                            "Check your email",
                            &format!("Confirm {email} to finish signing up."),
                            ToastVariant::Default,
                        );
                        on_close.run(());
                    }
                    Err(e) => {
                        log::warn!("auth request failed: {e}");
                        error.set(Some(auth_error_message(&e)));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (config, credentials, auth, toasts, on_success);
        }
    };

    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    focus_on_mount(dialog_ref);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--auth"
                node_ref=dialog_ref
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2>{move || mode.get().title()}</h2>
                <form class="auth-form" on:submit=on_submit>
                    <label class="dialog__label">
                        "Email"
                        <input
                            class="dialog__input"
                            type="email"
                            autocomplete="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Password"
                        <input
                            class="dialog__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || mode.get().submit_label()}
                        </button>
                    </div>
                </form>
                <button
                    class="auth-form__switch"
                    type="button"
                    on:click=move |_| {
                        mode.update(|m| *m = m.toggled());
                        error.set(None);
                    }
                >
                    {move || mode.get().switch_prompt()}
                </button>
            </div>
        </div>
    }
}
