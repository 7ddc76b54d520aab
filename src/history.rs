//! Creation-date resolution from version-control history
//!
//! `HistoryProvider` is the port the generator depends on; `GitHistory` is the
//! production adapter that shells out to `git log`.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use chrono::NaiveDate;

/// Resolves the date a file was first introduced.
///
/// Returning `None` means "undeterminable"; callers substitute
/// [`crate::models::FALLBACK_DATE`].
pub trait HistoryProvider {
    fn creation_date(&self, file: &Path) -> Option<String>;
}

/// Queries `git log` for the first commit that added a file, following renames
#[derive(Debug, Clone)]
pub struct GitHistory {
    repo_root: PathBuf,
}

impl GitHistory {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    /// Check if git is installed and available
    pub fn check_available() -> bool {
        Command::new("git")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Path argument handed to git: repo-relative when possible
    fn pathspec<'a>(&self, file: &'a Path) -> &'a Path {
        file.strip_prefix(&self.repo_root).unwrap_or(file)
    }

    fn run_log(&self, file: &Path) -> Option<String> {
        let output = Command::new("git")
            .arg("log")
            .arg("--diff-filter=A")
            .arg("--follow")
            .arg("--format=%cI")
            .arg("-1")
            .arg("--")
            .arg(self.pathspec(file))
            .current_dir(&self.repo_root)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output();

        let output = match output {
            Ok(output) => output,
            Err(err) => {
                tracing::debug!(error = %err, "failed to spawn git");
                return None;
            }
        };

        if !output.status.success() {
            tracing::debug!(
                file = %file.display(),
                code = ?output.status.code(),
                "git log failed"
            );
            return None;
        }

        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl HistoryProvider for GitHistory {
    fn creation_date(&self, file: &Path) -> Option<String> {
        let stdout = self.run_log(file)?;
        let date = date_prefix(&stdout);
        if date.is_none() {
            tracing::debug!(file = %file.display(), output = %stdout, "no creation date in git output");
        }
        date
    }
}

/// Extract the `YYYY-MM-DD` prefix of an ISO-8601 timestamp.
///
/// Returns `None` for empty output or a prefix that is not a calendar date.
pub fn date_prefix(timestamp: &str) -> Option<String> {
    let date = timestamp.trim().get(..10)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    Some(date.to_string())
}
