//! Implementation of the `mock-interview history` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::table::TableFormatter;
use crate::cli::output::{output, CommandOutput};
use crate::cli::runtime::AppContext;
use crate::cli::types::parse_category;
use crate::domain::models::{CompletedInterview, Config, InterviewCategory, ANONYMOUS_OWNER};
use crate::services::{summarize, HistoryService, HistorySummary};

/// Arguments for `history`.
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Owner whose interviews to list
    #[arg(short, long, default_value = ANONYMOUS_OWNER)]
    pub owner: String,

    /// Only show one category
    #[arg(short = 't', long, value_parser = parse_category)]
    pub category: Option<InterviewCategory>,
}

/// Completed interviews for one owner plus their summary.
#[derive(Debug, Serialize)]
pub struct HistoryOutput {
    /// Owner whose history this is
    pub owner: String,
    /// Oldest first
    pub interviews: Vec<CompletedInterview>,
    /// Aggregates over `interviews`
    pub summary: HistorySummary,
}

impl CommandOutput for HistoryOutput {
    fn to_human(&self) -> String {
        if self.interviews.is_empty() {
            return format!("No completed interviews for {}.", self.owner);
        }

        let mut lines = vec![TableFormatter::new().format_history(&self.interviews)];
        let average = self
            .summary
            .average_score
            .map_or_else(|| "-".to_string(), |avg| format!("{avg:.1}%"));
        let best = self
            .summary
            .best_score
            .map_or_else(|| "-".to_string(), |best| format!("{best}%"));
        lines.push(format!(
            "{} completed, average score {average}, best {best} (scores are simulated)",
            self.summary.count
        ));

        let per_category: Vec<String> = self
            .summary
            .by_category
            .iter()
            .map(|(category, count)| format!("{category}: {count}"))
            .collect();
        lines.push(per_category.join(", "));
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Lists completed interviews, optionally filtered by category.
pub async fn execute(args: HistoryArgs, config: Config, json_mode: bool) -> Result<()> {
    let context = AppContext::build(config).await?;
    let history = HistoryService::new(context.store);

    let interviews = history.completed(&args.owner, args.category).await?;
    let summary = summarize(&interviews);

    output(
        &HistoryOutput {
            owner: args.owner,
            interviews,
            summary,
        },
        json_mode,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history_message() {
        let out = HistoryOutput {
            owner: "alice".to_string(),
            interviews: vec![],
            summary: summarize(&[]),
        };
        assert_eq!(out.to_human(), "No completed interviews for alice.");
        assert_eq!(out.to_json()["summary"]["count"], 0);
    }
}
