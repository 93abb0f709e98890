//! Top navigation bar with brand and account controls.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::backend::BackendState;
use crate::state::toast::{ToastState, ToastVariant};

#[component]
pub fn NavBar(on_sign_in: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let backend = expect_context::<RwSignal<BackendState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_sign_out = move |_| {
        let Some(session) = auth.get_untracked().session else {
            return;
        };
        crate::util::session_store::clear();
        auth.set(AuthState { session: None, loading: false });
        crate::components::toaster::show_toast(toasts, "Signed out", "", ToastVariant::Default);

        if let Some(config) = backend.get_untracked().config().cloned() {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(crate::net::api::sign_out(config, session));
            #[cfg(not(feature = "hydrate"))]
            let _ = (config, session);
        }
    };

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href="/">"InternBoard"</a>
            <nav class="nav-bar__account">
                <Show when=move || !auth.get().loading>
                    <Show
                        when=move || auth.get().is_signed_in()
                        fallback=move || {
                            view! {
                                <button class="btn btn--primary" on:click=move |_| on_sign_in.run(())>
                                    "Sign in"
                                </button>
                            }
                        }
                    >
                        <span class="nav-bar__user">
                            {move || auth.get().display_name().unwrap_or_default().to_owned()}
                        </span>
                        <button class="btn" on:click=on_sign_out>
                            "Sign out"
                        </button>
                    </Show>
                </Show>
            </nav>
        </header>
    }
}
