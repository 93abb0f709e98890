//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::pages::internships::InternshipsPage;
use crate::state::{auth::AuthState, backend::BackendState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides auth, toast, and backend-config contexts, restores a stored
/// session, and loads the public backend settings from the host.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState { session: None, loading: true });
    let toasts = RwSignal::new(ToastState::default());
    let backend = RwSignal::new(BackendState::Loading);

    provide_context(auth);
    provide_context(toasts);
    provide_context(backend);

    // Browser-only bootstrap; runs once after hydration.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            let restored = crate::util::session_store::load(crate::util::session_store::now_secs());
            auth.set(AuthState { session: restored, loading: false });

            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_backend_config().await {
                    Ok(config) => backend.set(BackendState::Ready(config)),
                    Err(e) => {
                        log::error!("backend config unavailable: {e}");
                        backend.set(BackendState::Unavailable(e.to_string()));
                    }
                }
            });
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/internboard.css"/>
        <Title text="Internships"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=InternshipsPage/>
                <Route path=StaticSegment("internships") view=InternshipsPage/>
            </Routes>
        </Router>

        <Toaster/>
    }
}
