//! Page footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"InternBoard · Find your next internship"</p>
        </footer>
    }
}
