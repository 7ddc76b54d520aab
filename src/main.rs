//! Archivist CLI - regenerate "Latest Updates" and "Archives" lists
//!
//! Usage: archivist [--docs DIR] [--index FILE] [--archives FILE] [--limit N]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use archivist::cli::Cli;
use archivist::config::DEFAULT_CONFIG_FILE;
use archivist::{
    update_section, ArchiveGenerator, Config, Document, GitHistory, Scanner, Section,
    SpliceOutcome,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(&cli)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(level)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;

    let repo_root = match &cli.repo_root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("Could not determine current directory")?,
    };
    let repo_root = repo_root.canonicalize().unwrap_or(repo_root);

    let generator = ArchiveGenerator::new(Scanner::new(&config.scan), GitHistory::new(repo_root));
    let documents = generator
        .collect(&config.docs)
        .with_context(|| format!("Failed to scan {}", config.docs.display()))?;

    let today = chrono::Local::now().date_naive();
    let targets = [
        (Section::Updates, cli.index.as_deref()),
        (Section::Archives, cli.archives.as_deref()),
    ];

    for (section, target) in targets {
        let Some(target) = target else {
            continue;
        };
        let target = absolute(target);
        let outcome = update_section(
            section,
            &target,
            &documents,
            config.limit,
            today,
            cli.dry_run,
        )
        .with_context(|| format!("Failed to update {} in {}", section.label(), target.display()))?;

        report(cli.json, section, &target, &outcome, entry_count(section, &documents, config.limit))?;
    }

    if cli.json {
        let undated = documents.iter().filter(|d| d.is_undated()).count();
        let output = serde_json::json!({
            "event": "scan",
            "documents": documents.len(),
            "undated": undated
        });
        println!("{}", serde_json::to_string(&output)?);
    }

    Ok(())
}

/// Defaults < config file < ARCHIVIST_* env < CLI flags
fn resolve_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.is_file() {
                load_config(default)?
            } else {
                Config::default()
            }
        }
    };

    let mut config = config.with_env_overrides();
    if let Some(docs) = &cli.docs {
        config.docs = docs.clone();
    }
    if let Some(limit) = cli.limit {
        config.limit = limit;
    }
    Ok(config)
}

fn load_config(path: &Path) -> Result<Config> {
    let (config, warnings) = Config::load_with_warnings(path)
        .with_context(|| format!("Failed to load config {}", path.display()))?;

    for warning in warnings {
        match &warning.suggestion {
            Some(suggestion) => tracing::warn!(
                key = %warning.key,
                file = %warning.file.display(),
                line = ?warning.line,
                "unknown config key (did you mean '{}'?)",
                suggestion
            ),
            None => tracing::warn!(
                key = %warning.key,
                file = %warning.file.display(),
                line = ?warning.line,
                "unknown config key"
            ),
        }
    }

    Ok(config)
}

fn absolute(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

fn entry_count(section: Section, documents: &[Document], limit: usize) -> usize {
    match section {
        Section::Updates => limit.min(documents.len()),
        Section::Archives => documents.len(),
    }
}

fn report(
    json: bool,
    section: Section,
    target: &Path,
    outcome: &SpliceOutcome,
    entries: usize,
) -> Result<()> {
    if json {
        let status = match outcome {
            SpliceOutcome::Updated => "updated",
            SpliceOutcome::Unchanged => "unchanged",
            SpliceOutcome::DryRun { .. } => "dry_run",
        };
        let output = serde_json::json!({
            "event": "splice",
            "section": section.id(),
            "path": target.display().to_string(),
            "status": status,
            "entries": entries
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    match outcome {
        SpliceOutcome::Updated => {
            println!("Updated {} in {}", section.label(), target.display());
        }
        SpliceOutcome::Unchanged => {
            println!("{} already up to date in {}", section.label(), target.display());
        }
        SpliceOutcome::DryRun { diff } => {
            println!("Would update {} in {}", section.label(), target.display());
            print!("{}", diff);
        }
    }
    Ok(())
}
