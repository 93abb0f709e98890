//! Toast stack rendered in the page corner.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState, ToastVariant};

/// Queue a toast and schedule its auto-dismissal.
pub fn show_toast(toasts: RwSignal<ToastState>, title: &str, description: &str, variant: ToastVariant) {
    let id = toasts
        .try_update(|state| state.push(title, description, variant))
        .unwrap_or_default();

    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(crate::state::toast::TOAST_DURATION_MS, move || {
            toasts.update(|state| state.dismiss(id));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Renders every queued toast with a dismiss button.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let Toast { id, title, description, variant } = toast;
                    let class = format!("toast {}", variant.css_modifier());
                    let description = (!description.is_empty()).then_some(description);
                    view! {
                        <div class=class>
                            <div class="toast__body">
                                <p class="toast__title">{title}</p>
                                {description.map(|text| view! { <p class="toast__description">{text}</p> })}
                            </div>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.update(|state| state.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
