//! Implementation of the `mock-interview show` command.

use anyhow::Result;
use chrono::Utc;
use clap::Args;
use serde::Serialize;
use uuid::Uuid;

use crate::cli::output::table::TableFormatter;
use crate::cli::output::{output, CommandOutput};
use crate::cli::runtime::AppContext;
use crate::domain::models::{duration_label, relative_date_label, Config, InterviewSession};

/// Arguments for `show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Session ID
    pub id: Uuid,
}

/// One interview and its responses, or a not-found marker.
#[derive(Debug, Serialize)]
pub struct ShowOutput {
    /// Requested session id
    pub id: Uuid,
    /// Whether the session exists
    pub found: bool,
    /// The session with its responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<InterviewSession>,
    /// Relative start date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_label: Option<String>,
    /// Elapsed time, once completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_label: Option<String>,
}

impl ShowOutput {
    /// Builds the output from a store lookup, labelling completed sessions.
    pub fn from_lookup(id: Uuid, session: Option<InterviewSession>) -> Self {
        let now = Utc::now();
        Self {
            id,
            found: session.is_some(),
            date_label: session.as_ref().map(|s| relative_date_label(s.started_at, now)),
            duration_label: session
                .as_ref()
                .map(|s| duration_label(s.started_at, s.completed_at.unwrap_or(now))),
            session,
        }
    }
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        let Some(session) = &self.session else {
            return format!("Interview {} not found.", self.id);
        };

        let mut lines = vec![
            format!("Interview {}", session.id),
            format!("  Category: {}", session.category.title()),
            format!("  Owner:    {}", session.owner_id),
            format!("  Status:   {}", session.status),
            format!(
                "  Started:  {} ({})",
                session.started_at.format("%Y-%m-%d %H:%M UTC"),
                self.date_label.as_deref().unwrap_or_default()
            ),
            format!("  Duration: {}", self.duration_label.as_deref().unwrap_or_default()),
        ];
        if let Some(score) = session.score {
            lines.push(format!("  Score:    {score}% (simulated)"));
        }

        if session.responses.is_empty() {
            lines.push("\nNo answers recorded.".to_string());
        } else {
            lines.push(String::new());
            lines.push(TableFormatter::new().format_responses(session));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Prints one interview.
pub async fn execute(args: ShowArgs, config: Config, json_mode: bool) -> Result<()> {
    let context = AppContext::build(config).await?;
    let session = context.store.get_by_id(args.id).await?;
    output(&ShowOutput::from_lookup(args.id, session), json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::InterviewCategory;

    #[test]
    fn test_not_found_is_a_message() {
        let id = Uuid::new_v4();
        let out = ShowOutput::from_lookup(id, None);
        assert!(!out.found);
        assert_eq!(out.to_human(), format!("Interview {id} not found."));
        assert_eq!(out.to_json()["found"], false);
    }

    #[test]
    fn test_found_lists_details() {
        let mut session = InterviewSession::new(InterviewCategory::Industry, "bob");
        session.upsert_response(0, "my answer", "my feedback");
        let id = session.id;

        let out = ShowOutput::from_lookup(id, Some(session));
        let human = out.to_human();
        assert!(human.contains("Industry-Specific"));
        assert!(human.contains("in-progress"));
        assert!(human.contains("Today"));
        assert!(human.contains("my answer"));
        assert_eq!(out.to_json()["session"]["owner_id"], "bob");
    }
}
