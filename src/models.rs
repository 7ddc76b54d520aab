//! Core data models for Archivist
//!
//! These types represent the documents discovered in a docs tree and the
//! marker pairs that delimit generated regions in target files.

use std::path::{Path, PathBuf};

/// Date used when a document's creation date cannot be resolved
pub const FALLBACK_DATE: &str = "1970-01-01";

/// A document discovered under the docs root
///
/// Built once during the scan phase and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path relative to the docs root
    pub relative_path: PathBuf,

    /// Absolute path on disk
    pub source_path: PathBuf,

    /// Creation date as `YYYY-MM-DD`
    pub creation_date: String,

    /// Display title
    pub title: String,
}

impl Document {
    pub fn new(
        relative_path: impl Into<PathBuf>,
        source_path: impl Into<PathBuf>,
        creation_date: Option<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            relative_path: relative_path.into(),
            source_path: source_path.into(),
            creation_date: creation_date.unwrap_or_else(|| FALLBACK_DATE.to_string()),
            title: title.into(),
        }
    }

    /// Year-month key (`YYYY-MM`) used for archive grouping
    pub fn month_key(&self) -> &str {
        self.creation_date
            .get(..7)
            .unwrap_or(self.creation_date.as_str())
    }

    /// Whether the date came from the fallback rather than history
    pub fn is_undated(&self) -> bool {
        self.creation_date == FALLBACK_DATE
    }

    /// Directory-style URL: extension stripped, `/`-separated, trailing slash
    ///
    /// `guides/intro.md` becomes `guides/intro/`.
    pub fn url(&self) -> String {
        url_for(&self.relative_path)
    }
}

/// Render a relative document path as a directory-style URL
pub fn url_for(relative_path: &Path) -> String {
    let stemmed = relative_path.with_extension("");
    let parts: Vec<String> = stemmed
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    format!("{}/", parts.join("/"))
}

/// Literal begin/end marker pair delimiting a generated region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerBlock {
    pub begin: &'static str,
    pub end: &'static str,
}

impl MarkerBlock {
    /// Markers around the "Latest Updates" list
    pub const UPDATES: MarkerBlock = MarkerBlock {
        begin: "<!-- BEGIN AUTO UPDATES -->",
        end: "<!-- END AUTO UPDATES -->",
    };

    /// Markers around the monthly archive
    pub const ARCHIVES: MarkerBlock = MarkerBlock {
        begin: "<!-- BEGIN AUTO ARCHIVES -->",
        end: "<!-- END AUTO ARCHIVES -->",
    };
}
