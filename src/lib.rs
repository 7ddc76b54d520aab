//! Archivist - docs tree "Latest Updates" and archive generator
//!
//! Scans a documentation tree, dates each document by the git commit that
//! first added it, and regenerates marker-delimited list regions in target
//! markdown files.

pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod history;
pub mod models;
pub mod render;
pub mod scanner;
pub mod splice;
pub mod title;

// Re-exports for convenience
pub use config::Config;
pub use error::{ArchivistError, ArchivistResult};
pub use generator::{render_section, update_section, ArchiveGenerator, Section};
pub use history::{GitHistory, HistoryProvider};
pub use models::{Document, MarkerBlock, FALLBACK_DATE};
pub use scanner::Scanner;
pub use splice::{splice_file, splice_text, SpliceOutcome};
pub use title::extract_title;
