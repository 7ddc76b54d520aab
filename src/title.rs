//! Title extraction
//!
//! A document's display title comes from, in order:
//! 1. a `title:` key in leading `---` front matter
//! 2. the first top-level `# ` heading
//! 3. the file stem

use std::fs;
use std::path::Path;

/// Delimiter for frontmatter sections
const FRONTMATTER_DELIMITER: &str = "---";

/// Leading front matter split from the document body
#[derive(Debug, Clone, PartialEq)]
pub struct Frontmatter<'a> {
    /// Lines between the delimiters
    pub lines: Vec<&'a str>,
    /// Lines after the closing delimiter
    pub body: Vec<&'a str>,
}

/// Split leading front matter from content.
///
/// Returns `None` unless the first line is `---` and a closing `---` follows.
pub fn split_frontmatter(content: &str) -> Option<Frontmatter<'_>> {
    let lines: Vec<&str> = content.lines().collect();

    if lines.first()?.trim_end() != FRONTMATTER_DELIMITER {
        return None;
    }

    let closing = lines
        .iter()
        .skip(1)
        .position(|line| line.trim_end() == FRONTMATTER_DELIMITER)?
        + 1;

    Some(Frontmatter {
        lines: lines[1..closing].to_vec(),
        body: lines[closing + 1..].to_vec(),
    })
}

/// Value of the first `title:` key in front matter lines
fn frontmatter_title(lines: &[&str]) -> Option<String> {
    lines.iter().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        if key.trim() != "title" {
            return None;
        }
        non_empty(strip_quotes(value.trim()))
    })
}

fn strip_quotes(value: &str) -> &str {
    value.trim_matches('"').trim_matches('\'')
}

/// Text of the first `# ` heading
fn first_heading<'a>(mut lines: impl Iterator<Item = &'a str>) -> Option<String> {
    lines.find_map(|line| {
        let rest = line.trim_start().strip_prefix('#')?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        non_empty(rest.trim())
    })
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// Derive the display title from document content, if the content has one
pub fn title_from_content(content: &str) -> Option<String> {
    match split_frontmatter(content) {
        Some(fm) => frontmatter_title(&fm.lines).or_else(|| first_heading(fm.body.into_iter())),
        None => first_heading(content.lines()),
    }
}

/// File stem used when nothing better is available
pub fn stem_title(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Decode UTF-8, silently dropping invalid byte sequences
fn decode_dropping_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// Read `path` and extract its title. Never fails: unreadable files fall back
/// to the file stem.
pub fn extract_title(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => title_from_content(&decode_dropping_invalid(&bytes))
            .unwrap_or_else(|| stem_title(path)),
        Err(err) => {
            tracing::debug!(file = %path.display(), error = %err, "unreadable, using file stem");
            stem_title(path)
        }
    }
}
