//! Archive generation pipeline
//!
//! scan → resolve creation dates → extract titles → sort → render → splice

use std::path::Path;

use chrono::NaiveDate;

use crate::archive::sort_by_creation_desc;
use crate::error::{ArchivistError, ArchivistResult};
use crate::history::HistoryProvider;
use crate::models::{Document, MarkerBlock};
use crate::render::{render_archives, render_updates};
use crate::scanner::Scanner;
use crate::splice::{splice_file, SpliceOutcome};
use crate::title::extract_title;

/// A generated region and the file it is spliced into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// The N most recently created documents
    Updates,
    /// Every document, grouped by month
    Archives,
}

impl Section {
    pub fn markers(self) -> MarkerBlock {
        match self {
            Section::Updates => MarkerBlock::UPDATES,
            Section::Archives => MarkerBlock::ARCHIVES,
        }
    }

    /// Human-readable name used in CLI output
    pub fn label(self) -> &'static str {
        match self {
            Section::Updates => "Latest Updates",
            Section::Archives => "Archives",
        }
    }

    /// Stable identifier used in JSON output
    pub fn id(self) -> &'static str {
        match self {
            Section::Updates => "updates",
            Section::Archives => "archives",
        }
    }
}

/// Scans a docs tree and resolves every document's date and title
pub struct ArchiveGenerator<H> {
    scanner: Scanner,
    history: H,
}

impl<H: HistoryProvider> ArchiveGenerator<H> {
    pub fn new(scanner: Scanner, history: H) -> Self {
        Self { scanner, history }
    }

    /// Collect all documents under `docs_root`, sorted newest first.
    ///
    /// Per-file failures never abort the run: an unresolvable date becomes
    /// [`crate::models::FALLBACK_DATE`] and an unreadable file is titled by
    /// its stem.
    pub fn collect(&self, docs_root: &Path) -> ArchivistResult<Vec<Document>> {
        let root = docs_root
            .canonicalize()
            .map_err(|_| ArchivistError::DirectoryNotFound {
                path: docs_root.to_path_buf(),
            })?;

        let mut documents: Vec<Document> = self
            .scanner
            .scan(&root)?
            .into_iter()
            .map(|candidate| {
                let date = self.history.creation_date(&candidate.source_path);
                if date.is_none() {
                    tracing::debug!(
                        file = %candidate.relative_path.display(),
                        "no creation date, using fallback"
                    );
                }
                let title = extract_title(&candidate.source_path);
                Document::new(candidate.relative_path, candidate.source_path, date, title)
            })
            .collect();

        sort_by_creation_desc(&mut documents);

        let undated = documents.iter().filter(|d| d.is_undated()).count();
        tracing::info!(documents = documents.len(), undated, "collected documents");
        Ok(documents)
    }
}

/// Render a section's block from documents sorted newest first
pub fn render_section(
    section: Section,
    documents: &[Document],
    limit: usize,
    today: NaiveDate,
) -> String {
    match section {
        Section::Updates => render_updates(documents, limit, today),
        Section::Archives => render_archives(documents),
    }
}

/// Render a section and splice it into `target`
pub fn update_section(
    section: Section,
    target: &Path,
    documents: &[Document],
    limit: usize,
    today: NaiveDate,
    dry_run: bool,
) -> ArchivistResult<SpliceOutcome> {
    let block = render_section(section, documents, limit, today);
    splice_file(target, &section.markers(), &block, dry_run)
}
