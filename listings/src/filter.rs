//! Client-side search over an in-memory internship list.
//!
//! Matching is a case-insensitive substring test against the title, company,
//! and description. An empty (or whitespace-only) query matches everything.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::model::Internship;

/// Whether `internship` matches the search `query`.
#[must_use]
pub fn matches(internship: &Internship, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    contains_folded(&internship.title, &needle)
        || contains_folded(&internship.company, &needle)
        || internship
            .description
            .as_deref()
            .is_some_and(|text| contains_folded(text, &needle))
}

/// Internships matching `query`, in their original order.
#[must_use]
pub fn filter_internships<'a>(items: &'a [Internship], query: &str) -> Vec<&'a Internship> {
    items.iter().filter(|item| matches(item, query)).collect()
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
