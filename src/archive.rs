//! Ordering and grouping of resolved documents

use crate::models::Document;

/// Documents sharing a creation year-month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGroup<'a> {
    /// `YYYY-MM`
    pub key: &'a str,
    pub documents: Vec<&'a Document>,
}

/// Sort newest first. Stable, so equal dates keep discovery order.
///
/// Plain string comparison is correct for fixed-width `YYYY-MM-DD` dates.
pub fn sort_by_creation_desc(documents: &mut [Document]) {
    documents.sort_by(|a, b| b.creation_date.cmp(&a.creation_date));
}

/// The first `limit` documents of an already sorted slice
pub fn recent(documents: &[Document], limit: usize) -> &[Document] {
    &documents[..limit.min(documents.len())]
}

/// Partition an already sorted slice by `YYYY-MM`, newest month first.
///
/// Each group keeps the relative order of the input.
pub fn group_by_month(documents: &[Document]) -> Vec<MonthGroup<'_>> {
    let mut groups: Vec<MonthGroup<'_>> = Vec::new();
    for doc in documents {
        let key = doc.month_key();
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.documents.push(doc),
            None => groups.push(MonthGroup {
                key,
                documents: vec![doc],
            }),
        }
    }
    groups.sort_by(|a, b| b.key.cmp(a.key));
    groups
}
