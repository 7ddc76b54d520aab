//! Document scanner
//!
//! Walks a docs tree and yields the markdown files eligible for the
//! generated lists, in discovery order.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use ignore::WalkBuilder;

use crate::config::ScanConfig;
use crate::error::{ArchivistError, ArchivistResult};

/// Archive page itself, never listed (matched case-insensitively at the docs root)
const ARCHIVES_PAGE: &str = "archives.md";

/// A file accepted by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Path relative to the docs root
    pub relative_path: PathBuf,
    /// Path on disk
    pub source_path: PathBuf,
}

/// Filters applied while walking the docs tree
#[derive(Debug, Clone)]
pub struct Scanner {
    extensions: HashSet<String>,
    ignore_dirs: HashSet<String>,
    ignore_files: HashSet<String>,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(&ScanConfig::default())
    }
}

impl Scanner {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            extensions: config
                .extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect(),
            ignore_dirs: config.ignore_dirs.iter().cloned().collect(),
            ignore_files: config.ignore_files.iter().cloned().collect(),
        }
    }

    /// Walk `root` recursively and collect candidate documents.
    ///
    /// Siblings are visited in file-name order, so repeated runs over the same
    /// tree produce the same sequence.
    pub fn scan(&self, root: &Path) -> ArchivistResult<Vec<Candidate>> {
        if !root.is_dir() {
            return Err(ArchivistError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }

        let ignore_dirs = self.ignore_dirs.clone();
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                !(is_dir
                    && entry.depth() > 0
                    && entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| ignore_dirs.contains(name)))
            })
            .build();

        let mut candidates = Vec::new();
        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let Ok(relative) = path.strip_prefix(root) else {
                continue;
            };

            if self.accepts(relative) {
                tracing::trace!(path = %relative.display(), "candidate");
                candidates.push(Candidate {
                    relative_path: relative.to_path_buf(),
                    source_path: path.to_path_buf(),
                });
            }
        }

        tracing::debug!(count = candidates.len(), root = %root.display(), "scan complete");
        Ok(candidates)
    }

    /// Whether a path relative to the docs root passes every filter
    pub fn accepts(&self, relative: &Path) -> bool {
        self.has_markdown_extension(relative)
            && !self.is_ignored_file(relative)
            && !self.is_in_ignored_dir(relative)
    }

    fn has_markdown_extension(&self, relative: &Path) -> bool {
        relative
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.extensions.contains(&e.to_lowercase()))
    }

    fn is_ignored_file(&self, relative: &Path) -> bool {
        let by_name = relative
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| self.ignore_files.contains(n));
        if by_name {
            return true;
        }

        let lowered = posix_string(relative).to_lowercase();
        lowered == ARCHIVES_PAGE
            || self
                .ignore_files
                .iter()
                .any(|f| f.to_lowercase() == lowered)
    }

    fn is_in_ignored_dir(&self, relative: &Path) -> bool {
        relative.components().any(|c| match c {
            Component::Normal(part) => part
                .to_str()
                .is_some_and(|p| self.ignore_dirs.contains(p)),
            _ => false,
        })
    }
}

fn posix_string(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
