//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ArchivistResult;

use super::loader::{self, ConfigWarning};

/// Markdown extensions picked up by the scanner (compared case-insensitively)
pub const DEFAULT_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Directory names never descended into
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    ".git",
    "assets",
    "images",
    "img",
    "static",
    "styles",
    "javascripts",
    "javascript",
    "overrides",
];

/// File names skipped wherever they appear
pub const DEFAULT_IGNORE_FILES: &[&str] = &["index.md"];

/// Default number of entries in the "Latest Updates" list
pub const DEFAULT_LIMIT: usize = 20;

/// Scanner filter sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default = "default_ignore_dirs")]
    pub ignore_dirs: Vec<String>,

    #[serde(default = "default_ignore_files")]
    pub ignore_files: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignore_dirs: default_ignore_dirs(),
            ignore_files: default_ignore_files(),
        }
    }
}

fn to_owned_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_extensions() -> Vec<String> {
    to_owned_vec(DEFAULT_EXTENSIONS)
}

fn default_ignore_dirs() -> Vec<String> {
    to_owned_vec(DEFAULT_IGNORE_DIRS)
}

fn default_ignore_files() -> Vec<String> {
    to_owned_vec(DEFAULT_IGNORE_FILES)
}

fn default_docs() -> PathBuf {
    PathBuf::from("docs")
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Docs root to scan
    #[serde(default = "default_docs")]
    pub docs: PathBuf,

    /// Entries in the "Latest Updates" list
    #[serde(default = "default_limit")]
    pub limit: usize,

    #[serde(default)]
    pub scan: ScanConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            docs: default_docs(),
            limit: default_limit(),
            scan: ScanConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ArchivistResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ArchivistResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (ARCHIVIST_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
