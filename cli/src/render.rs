//! Plain-text rendering for terminal output.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use listings::Internship;

const HEADERS: [&str; 4] = ["ID", "TITLE", "COMPANY", "DURATION"];

/// Left-aligned table of internships, one per line after a header row.
#[must_use]
pub fn render_table(items: &[&Internship]) -> String {
    let rows: Vec<[&str; 4]> = items
        .iter()
        .map(|item| {
            [
                item.id.as_str(),
                item.title.as_str(),
                item.company.as_str(),
                item.duration_label().unwrap_or("-"),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in std::iter::once(HEADERS).chain(rows) {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Multi-line detail view of one internship.
#[must_use]
pub fn render_detail(item: &Internship) -> String {
    let mut out = format!("{}\n{}\n", item.title, item.company);
    if let Some(duration) = item.duration_label() {
        out.push_str(&format!("Duration: {duration}\n"));
    }
    out.push_str(&format!("ID: {}\n\n", item.id));
    out.push_str(item.description_text().unwrap_or("No description provided."));
    out.push('\n');
    out
}

/// Footer line under a listing.
#[must_use]
pub fn render_count(shown: usize, total: usize) -> String {
    if shown == total {
        format!("{total} internship(s)")
    } else {
        format!("{shown} of {total} internship(s) match")
    }
}
