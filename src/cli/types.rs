//! CLI type definitions
//!
//! Clap structures for the `mock-interview` command line.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::history::HistoryArgs;
use crate::cli::commands::init::InitArgs;
use crate::cli::commands::practice::PracticeArgs;
use crate::cli::commands::show::ShowArgs;
use crate::domain::models::{InterviewCategory, StorageBackend};

/// Top-level command line.
#[derive(Parser, Debug)]
#[command(name = "mock-interview")]
#[command(about = "Practice interviews with generated questions and feedback", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file to use instead of .mock-interview/config.yaml
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer a sequence of questions and get feedback on each
    Practice(PracticeArgs),

    /// List completed interviews with a summary
    History(HistoryArgs),

    /// Show one interview and its responses
    Show(ShowArgs),

    /// Write a default configuration and create the database
    Init(InitArgs),
}

/// Clap value parser for interview categories
pub fn parse_category(s: &str) -> Result<InterviewCategory, String> {
    InterviewCategory::from_str(s).ok_or_else(|| {
        format!("unknown category '{s}' (expected technical, behavioral, or industry)")
    })
}

/// Clap value parser for storage backends
pub fn parse_backend(s: &str) -> Result<StorageBackend, String> {
    match s.to_lowercase().as_str() {
        "memory" => Ok(StorageBackend::Memory),
        "sqlite" => Ok(StorageBackend::Sqlite),
        _ => Err(format!("unknown backend '{s}' (expected memory or sqlite)")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_accepts_aliases() {
        assert_eq!(parse_category("technical"), Ok(InterviewCategory::Technical));
        assert_eq!(parse_category("industry-specific"), Ok(InterviewCategory::Industry));
        assert!(parse_category("trivia").is_err());
    }

    #[test]
    fn test_parse_backend() {
        assert_eq!(parse_backend("SQLite"), Ok(StorageBackend::Sqlite));
        assert!(parse_backend("postgres").is_err());
    }
}
