//! Test environment builder for isolated Archivist testing.
//!
//! Provides `TestEnv` - a temp project directory with a docs tree, optional
//! git history, and helpers to run the Archivist CLI against it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Result of running an Archivist CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project directory plus CLI helpers
pub struct TestEnv {
    /// Temporary directory acting as the repository root
    pub project_root: TempDir,
    archivist_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create temp dir"),
            archivist_bin: PathBuf::from(env!("CARGO_BIN_EXE_archivist")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file to the project directory
    pub fn write_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Read a project file's content
    pub fn read_file(&self, relative_path: &str) -> String {
        let full_path = self.project_path(relative_path);
        std::fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }

    /// Run archivist in this environment from project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run archivist from project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.archivist_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env_remove("ARCHIVIST_DOCS")
            .env_remove("ARCHIVIST_LIMIT");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute archivist");
        output_to_result(output)
    }

    /// Initialise a git repository in the project root.
    ///
    /// Returns `false` when git is not installed; callers skip the test.
    pub fn init_git(&self) -> bool {
        let available = Command::new("git")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false);
        if !available {
            return false;
        }

        self.git(&["init", "-q"], None);
        true
    }

    /// Stage everything and commit with a fixed author/committer date
    /// (`YYYY-MM-DD`, noon UTC).
    pub fn commit_all(&self, message: &str, date: &str) {
        self.git(&["add", "-A"], None);
        self.git(&["commit", "-q", "-m", message], Some(date));
    }

    /// Run a git command in the project root, panicking on failure.
    pub fn git(&self, args: &[&str], date: Option<&str>) {
        let mut cmd = Command::new("git");
        cmd.current_dir(self.project_root.path())
            .args([
                "-c",
                "user.name=Archivist Tests",
                "-c",
                "user.email=tests@example.invalid",
                "-c",
                "commit.gpgsign=false",
                "-c",
                "init.defaultBranch=main",
            ])
            .args(args)
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("HOME", self.project_root.path())
            .env("XDG_CONFIG_HOME", self.project_root.path());

        if let Some(date) = date {
            let stamp = format!("{date}T12:00:00+00:00");
            cmd.env("GIT_AUTHOR_DATE", &stamp)
                .env("GIT_COMMITTER_DATE", &stamp);
        }

        let output = cmd.output().expect("Failed to execute git");
        assert!(
            output.status.success(),
            "git {:?} failed:\n{}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Whether `path` lies inside a git work tree (e.g. a temp dir under a checkout)
pub fn inside_git_work_tree(path: &Path) -> bool {
    Command::new("git")
        .args(["rev-parse", "--is-inside-work-tree"])
        .current_dir(path)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
