//! Internship listing state for the internships page.
//!
//! DESIGN
//! ======
//! The fetched rows are kept whole; the search query is applied on read so
//! clearing the search never needs another network call.

#[cfg(test)]
#[path = "internships_test.rs"]
mod internships_test;

use listings::Internship;

/// Fetched internships plus search, selection, and submit status.
#[derive(Clone, Debug, Default)]
pub struct InternshipsState {
    pub items: Vec<Internship>,
    pub loading: bool,
    pub error: Option<String>,
    pub query: String,
    /// Internship shown in the details dialog.
    pub selected_id: Option<String>,
    /// An application insert is in flight.
    pub submitting: bool,
}

impl InternshipsState {
    /// Initial state before the first fetch completes.
    #[must_use]
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Replace the listing with a successful fetch.
    pub fn loaded(&mut self, items: Vec<Internship>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed fetch; the listing is left empty.
    pub fn failed(&mut self, message: impl Into<String>) {
        self.items.clear();
        self.loading = false;
        self.error = Some(message.into());
        self.selected_id = None;
    }

    /// Internships matching the current query, in backend order.
    #[must_use]
    pub fn visible(&self) -> Vec<Internship> {
        listings::filter_internships(&self.items, &self.query)
            .into_iter()
            .cloned()
            .collect()
    }

    /// The internship open in the details dialog, if it is still listed.
    #[must_use]
    pub fn selected(&self) -> Option<&Internship> {
        let id = self.selected_id.as_deref()?;
        self.items.iter().find(|item| item.id == id)
    }
}
