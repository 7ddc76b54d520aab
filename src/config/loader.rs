//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ArchivistError, ArchivistResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ArchivistResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ArchivistError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Apply environment variable overrides (ARCHIVIST_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // ARCHIVIST_DOCS
    if let Ok(docs) = std::env::var("ARCHIVIST_DOCS") {
        if !docs.trim().is_empty() {
            config.docs = PathBuf::from(docs);
        }
    }

    // ARCHIVIST_LIMIT
    if let Ok(limit) = std::env::var("ARCHIVIST_LIMIT") {
        match limit.trim().parse::<usize>() {
            Ok(n) => config.limit = n,
            Err(_) => tracing::warn!(value = %limit, "ignoring unparsable ARCHIVIST_LIMIT"),
        }
    }

    config
}

const KNOWN_KEYS: &[&str] = &[
    "docs",
    "limit",
    "scan",
    "extensions",
    "ignore_dirs",
    "ignore_files",
];

/// 1-based line on which `key` is assigned or opens a table
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let line = line.trim_start().trim_start_matches('[').trim_start();
            line.strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with(['=', ']', '.']))
        })
        .map(|i| i + 1)
}

/// Closest known key within two edits
fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|key| (edit_distance(unknown, key), *key))
        .filter(|(dist, _)| *dist <= 2)
        .min()
        .map(|(_, key)| key.to_string())
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == *cb {
                diag
            } else {
                1 + diag.min(above).min(row[j])
            };
            diag = above;
        }
    }

    row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_key_close_typo() {
        assert_eq!(suggest_key("limt"), Some("limit".to_string()));
        assert_eq!(suggest_key("ignore_dir"), Some("ignore_dirs".to_string()));
    }

    #[test]
    fn test_suggest_key_no_match() {
        assert_eq!(suggest_key("completely_unrelated"), None);
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("docs", "docs"), 0);
        assert_eq!(edit_distance("doc", "docs"), 1);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("", "scan"), 4);
    }

    #[test]
    fn test_find_line_number() {
        let content = "docs = \"d\"\nlimt = 3\n";
        assert_eq!(find_line_number(content, "limt"), Some(2));
        assert_eq!(find_line_number(content, "nope"), None);
    }

    #[test]
    fn test_find_line_number_matches_whole_key() {
        let content = "[scan]\nignore_dirs = []\nignore_dir = [\"x\"]\n";
        assert_eq!(find_line_number(content, "ignore_dir"), Some(3));
        assert_eq!(find_line_number(content, "scan"), Some(1));
    }
}
