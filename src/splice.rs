//! Marker-delimited region rewriting
//!
//! Target files are treated as opaque text with one editable region between
//! a begin and an end marker. Missing markers are a hard error; markers are
//! never inserted automatically.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{ArchivistError, ArchivistResult};
use crate::models::MarkerBlock;

/// Result of splicing into a target file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpliceOutcome {
    /// File rewritten with new content
    Updated,
    /// Region already held this content; nothing written
    Unchanged,
    /// Dry run; holds the unified diff that would have been applied
    DryRun { diff: String },
}

/// Replace the text between the first begin marker and the first end marker
/// after it. Everything outside that region is preserved byte-for-byte.
pub fn splice_text(
    text: &str,
    markers: &MarkerBlock,
    block: &str,
    file: &Path,
) -> ArchivistResult<String> {
    let not_found = || ArchivistError::MarkersNotFound {
        begin: markers.begin.to_string(),
        end: markers.end.to_string(),
        file: file.to_path_buf(),
    };

    let region_start = text.find(markers.begin).ok_or_else(not_found)? + markers.begin.len();
    let region_end = text[region_start..]
        .find(markers.end)
        .ok_or_else(not_found)?
        + region_start;

    let mut out = String::with_capacity(text.len() + block.len() + 2);
    out.push_str(&text[..region_start]);
    out.push('\n');
    out.push_str(block);
    if !block.is_empty() && !block.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&text[region_end..]);
    Ok(out)
}

/// Splice `block` into the file at `path`.
///
/// With `dry_run`, nothing is written and the diff is returned instead. On a
/// marker error the file is left untouched.
pub fn splice_file(
    path: &Path,
    markers: &MarkerBlock,
    block: &str,
    dry_run: bool,
) -> ArchivistResult<SpliceOutcome> {
    let current = fs::read_to_string(path)?;
    let updated = splice_text(&current, markers, block, path)?;

    if updated == current {
        tracing::debug!(file = %path.display(), "region already up to date");
        return Ok(SpliceOutcome::Unchanged);
    }

    if dry_run {
        return Ok(SpliceOutcome::DryRun {
            diff: unified_diff(path, &current, &updated),
        });
    }

    atomic_write(path, &updated)?;
    tracing::info!(file = %path.display(), "rewrote generated region");
    Ok(SpliceOutcome::Updated)
}

/// Write content via a temp file in the same directory, then rename over `path`.
///
/// A symlinked target is written through to the file it points at, and an
/// existing target keeps its permissions.
pub fn atomic_write(path: &Path, content: &str) -> ArchivistResult<()> {
    let target = match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => fs::canonicalize(path)?,
        _ => path.to_path_buf(),
    };
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    if let Ok(meta) = fs::metadata(&target) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}

/// Generate a unified diff between old and new content
pub fn unified_diff(path: &Path, old: &str, new: &str) -> String {
    use similar::TextDiff;
    TextDiff::from_lines(old, new)
        .unified_diff()
        .header(
            &format!("a/{}", path.display()),
            &format!("b/{}", path.display()),
        )
        .to_string()
}
