//! Card for one internship in the listing grid.
//!
//! DESIGN
//! ======
//! Cards only show a short description excerpt; the full text lives in the
//! details dialog opened by clicking the card.

#[cfg(test)]
#[path = "internship_card_test.rs"]
mod internship_card_test;

use leptos::prelude::*;
use listings::Internship;

/// Maximum characters of description shown on a card.
const EXCERPT_CHARS: usize = 140;

/// Shorten `text` to at most `max_chars` characters, ending in `…` when cut.
pub(crate) fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

/// A clickable card summarizing an internship.
#[component]
pub fn InternshipCard(internship: Internship, on_open: Callback<String>) -> impl IntoView {
    let id = internship.id.clone();
    let duration = internship.duration_label().map(ToOwned::to_owned);
    let summary = internship
        .description_text()
        .map(|text| excerpt(text, EXCERPT_CHARS));

    view! {
        <button
            class="internship-card"
            type="button"
            on:click=move |_| on_open.run(id.clone())
        >
            <span class="internship-card__header">
                <span class="internship-card__title">{internship.title}</span>
                {duration.map(|label| view! { <span class="badge">{label}</span> })}
            </span>
            <span class="internship-card__company">{internship.company}</span>
            {summary.map(|text| view! { <span class="internship-card__summary">{text}</span> })}
            <span class="internship-card__cta">"View details"</span>
        </button>
    }
}
