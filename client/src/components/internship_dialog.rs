//! Modal with an internship's full details and the apply action.

#[cfg(test)]
#[path = "internship_dialog_test.rs"]
mod internship_dialog_test;

use leptos::prelude::*;
use listings::Internship;

/// Whether `key` should close an open dialog.
pub(crate) fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

/// Focus the dialog once it is mounted.
pub(crate) fn focus_on_mount(dialog_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = dialog_ref.get() {
                let _ = el.focus();
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = dialog_ref;
        }
    });
}

/// Details dialog. Escape or a backdrop click closes it.
#[component]
pub fn InternshipDialog(
    internship: Internship,
    #[prop(into)] submitting: Signal<bool>,
    on_apply: Callback<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let id = internship.id.clone();
    let duration = internship.duration_label().map(ToOwned::to_owned);
    let description = internship
        .description_text()
        .map_or_else(|| "No description provided.".to_owned(), ToOwned::to_owned);

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
                class="dialog dialog--internship"
                node_ref=dialog_ref
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2>{internship.title}</h2>
                <p class="dialog__subtitle">{internship.company}</p>
                {duration.map(|label| view! { <span class="badge">{label}</span> })}
                <p class="dialog__description">{description}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || submitting.get()
                        on:click=move |_| on_apply.run(id.clone())
                    >
                        {move || if submitting.get() { "Submitting…" } else { "Apply Now" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
