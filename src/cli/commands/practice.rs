//! Implementation of the `mock-interview practice` command.
//!
//! Answers are typed on stdin. A blank line submits the answer collected so
//! far and `:quit` leaves the interview in progress.

use anyhow::{Context, Result};
use clap::Args;
use console::{style, Term};
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use uuid::Uuid;

use crate::cli::output::progress::create_spinner;
use crate::cli::output::{format_clock, output, CommandOutput};
use crate::cli::runtime::AppContext;
use crate::cli::types::parse_category;
use crate::domain::errors::DomainError;
use crate::domain::models::{
    duration_label, CandidateProfile, Config, InterviewCategory, InterviewStatus, LifecycleState,
    ANONYMOUS_OWNER,
};
use crate::services::InterviewController;

const QUIT_COMMAND: &str = ":quit";

/// Arguments for `practice`.
#[derive(Args, Debug)]
pub struct PracticeArgs {
    /// Interview category: technical, behavioral, or industry
    #[arg(short = 't', long, value_parser = parse_category, required_unless_present = "resume")]
    pub category: Option<InterviewCategory>,

    /// Continue an in-progress interview instead of starting a new one
    #[arg(long, value_name = "ID", conflicts_with = "category")]
    pub resume: Option<Uuid>,

    /// Owner recorded on the session
    #[arg(short, long, default_value = ANONYMOUS_OWNER)]
    pub owner: String,

    /// Role the questions should target
    #[arg(long, default_value = "Software Engineer")]
    pub job_title: String,

    /// Candidate experience level
    #[arg(long, default_value = "mid-level")]
    pub experience: String,

    /// Industry for industry-specific questions
    #[arg(long, default_value = "technology")]
    pub industry: String,
}

impl PracticeArgs {
    fn profile(&self) -> CandidateProfile {
        CandidateProfile::new(&self.job_title, &self.experience, &self.industry)
    }
}

/// Summary printed when a practice run ends.
#[derive(Debug, Serialize)]
pub struct PracticeOutput {
    /// Session that was practised
    pub session_id: Uuid,
    /// Interview category
    pub category: InterviewCategory,
    /// Status when the run ended
    pub status: InterviewStatus,
    /// Questions with a saved response
    pub answered: usize,
    /// Questions asked in this run
    pub question_count: usize,
    /// Simulated score, once completed
    pub score: Option<u8>,
    /// Elapsed time, once completed
    pub duration_label: Option<String>,
}

impl CommandOutput for PracticeOutput {
    fn to_human(&self) -> String {
        match (self.status, self.score) {
            (InterviewStatus::Completed, Some(score)) => format!(
                "{} complete: {} of {} answered, score {}% (simulated) in {}.\nReview it with: mock-interview show {}",
                self.category.title(),
                self.answered,
                self.question_count,
                score,
                self.duration_label.as_deref().unwrap_or("0 min"),
                self.session_id
            ),
            _ => format!(
                "Interview {} left in progress ({} of {} answered).\nContinue with: mock-interview practice --resume {}",
                self.session_id, self.answered, self.question_count, self.session_id
            ),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// What the user typed at a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    /// An answer, possibly blank.
    Text(String),
    /// The user asked to stop.
    Quit,
}

/// Collects lines until a blank line. Returns `Quit` on `:quit` or end of input.
pub async fn read_answer<R: AsyncBufRead + Unpin>(lines: &mut tokio::io::Lines<R>) -> Result<UserInput> {
    let mut answer = String::new();
    while let Some(line) = lines.next_line().await.context("Failed to read from stdin")? {
        let trimmed = line.trim_end();
        if trimmed.trim() == QUIT_COMMAND {
            return Ok(UserInput::Quit);
        }
        if trimmed.trim().is_empty() {
            return Ok(UserInput::Text(answer));
        }
        if !answer.is_empty() {
            answer.push('\n');
        }
        answer.push_str(trimmed);
    }

    if answer.trim().is_empty() {
        Ok(UserInput::Quit)
    } else {
        Ok(UserInput::Text(answer))
    }
}

/// Runs an interactive interview on stdin.
pub async fn execute(args: PracticeArgs, config: Config, json_mode: bool) -> Result<()> {
    let context = AppContext::build(config).await?;
    let profile = args.profile();
    let term = if json_mode { Term::stderr() } else { Term::stdout() };

    let spinner = create_spinner("Preparing questions...", !json_mode);
    let controller = match args.resume {
        Some(id) => {
            let resumed = InterviewController::resume(
                context.store.clone(),
                context.generator.clone(),
                &context.config.interview,
                id,
                profile,
            )
            .await;
            spinner.finish_and_clear();
            match resumed? {
                Some(controller) => controller,
                None => {
                    term.write_line(&format!(
                        "No in-progress interview with id {id}. Start a new one with --category."
                    ))?;
                    return Ok(());
                }
            }
        }
        None => {
            let category = args
                .category
                .context("--category is required when not resuming")?;
            let started = InterviewController::start(
                context.store.clone(),
                context.generator.clone(),
                &context.config.interview,
                category,
                &args.owner,
                profile,
            )
            .await;
            spinner.finish_and_clear();
            started?
        }
    };

    let question_count = controller.question_count();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let session_id = run_interview(controller, &mut lines, &term, json_mode).await?;

    let session = context
        .store
        .get_by_id(session_id)
        .await?
        .ok_or(DomainError::SessionNotFound(session_id))?;

    let summary = PracticeOutput {
        session_id,
        category: session.category,
        status: session.status,
        answered: session.responses.len(),
        question_count,
        score: session.score,
        duration_label: session
            .completed_at
            .map(|end| duration_label(session.started_at, end)),
    };
    output(&summary, json_mode);
    Ok(())
}

/// Drives the controller from user input until it finishes or the user quits.
/// Returns the session id either way.
async fn run_interview<R: AsyncBufRead + Unpin>(
    mut controller: InterviewController,
    lines: &mut tokio::io::Lines<R>,
    term: &Term,
    json_mode: bool,
) -> Result<Uuid> {
    term.write_line(&format!(
        "{} ({} questions). Finish each answer with a blank line; type {} to stop.",
        style(controller.category().title()).bold(),
        controller.question_count(),
        style(QUIT_COMMAND).cyan()
    ))?;

    loop {
        match controller.state() {
            LifecycleState::AwaitingAnswer(index) => {
                term.write_line("")?;
                term.write_line(&format!(
                    "{} {}",
                    style(format!("Question {}/{}", index + 1, controller.question_count())).bold().cyan(),
                    style(format!("[{} left]", format_clock(controller.countdown().remaining()))).dim()
                ))?;
                term.write_line(controller.current_question().unwrap_or_default())?;

                let answer = match read_answer(lines).await? {
                    UserInput::Quit => return Ok(controller.abandon()),
                    UserInput::Text(answer) => answer,
                };
                if controller.countdown().remaining() == 0 {
                    term.write_line(&style("Time ran out on that one; keep an eye on the clock.").yellow().to_string())?;
                }

                let spinner = create_spinner("Reviewing your answer...", !json_mode);
                let submitted = controller.submit(&answer).await.map(str::to_string);
                spinner.finish_and_clear();

                match submitted {
                    Ok(feedback) => {
                        term.write_line(&format!("\n{}", style("Feedback").bold().green()))?;
                        term.write_line(&feedback)?;
                    }
                    Err(DomainError::EmptyResponse) => {
                        term.write_line(&style("Please type an answer before submitting.").yellow().to_string())?;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            LifecycleState::ReviewingFeedback(index) => {
                let last = index + 1 >= controller.question_count();
                term.write_line(&style(if last {
                    "Press Enter to finish the interview."
                } else {
                    "Press Enter for the next question."
                })
                .dim()
                .to_string())?;

                if read_answer(lines).await? == UserInput::Quit {
                    return Ok(controller.abandon());
                }
                if let Err(e) = controller.advance().await {
                    term.write_line(&style(format!("Could not save progress: {e}. Press Enter to retry.")).red().to_string())?;
                }
            }
            LifecycleState::Finished => return Ok(controller.session_id()),
            LifecycleState::Advancing => {
                anyhow::bail!("interview left in the advancing state")
            }
        }
    }
}
