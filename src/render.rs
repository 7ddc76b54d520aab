//! Markdown rendering for the generated regions
//!
//! Output never includes the marker lines; see [`crate::splice`].

use chrono::NaiveDate;

use crate::archive::{group_by_month, recent};
use crate::models::Document;

/// `- <date> — [<title>](<url>)`
pub fn entry_line(doc: &Document) -> String {
    format!("- {} — [{}]({})", doc.creation_date, doc.title, doc.url())
}

/// Generation comment heading the "Latest Updates" list
pub fn generated_comment(today: NaiveDate) -> String {
    format!(
        "_Generated on {} • Ordered by creation time_",
        today.format("%Y-%m-%d")
    )
}

/// Render the "Latest Updates" list from documents sorted newest first.
pub fn render_updates(documents: &[Document], limit: usize, today: NaiveDate) -> String {
    let mut out = vec![generated_comment(today), String::new()];
    out.extend(recent(documents, limit).iter().map(entry_line));
    out.push(String::new());
    out.join("\n")
}

/// Render the monthly archive from documents sorted newest first.
///
/// The result always ends with exactly one newline.
pub fn render_archives(documents: &[Document]) -> String {
    let mut out = Vec::new();
    for group in group_by_month(documents) {
        out.push(format!("## {}", group.key));
        out.extend(group.documents.into_iter().map(entry_line));
        out.push(String::new());
    }
    format!("{}\n", out.join("\n").trim_end())
}
