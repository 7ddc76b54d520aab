//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - `--docs` and `--limit` fall back to `archivist.toml` / `ARCHIVIST_*` when omitted
//! - With neither `--index` nor `--archives`, the docs tree is scanned but nothing is written

use std::path::PathBuf;

use clap::Parser;

/// Archivist - regenerate "Latest Updates" and monthly archive lists for a docs tree
#[derive(Parser, Debug)]
#[command(name = "archivist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Docs directory to scan [default: docs]
    #[arg(long)]
    pub docs: Option<PathBuf>,

    /// File whose "Latest Updates" region is regenerated
    #[arg(long)]
    pub index: Option<PathBuf>,

    /// File whose "Archives" region is regenerated
    #[arg(long)]
    pub archives: Option<PathBuf>,

    /// How many entries in "Latest Updates" [default: 20]
    #[arg(long)]
    pub limit: Option<usize>,

    /// Repository root used for git history queries [default: current directory]
    #[arg(long)]
    pub repo_root: Option<PathBuf>,

    /// Config file [default: archivist.toml, if present]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Show the changes each target would receive without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
