//! Table output for interview history and session detail.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;

use super::truncate;
use crate::domain::models::{CompletedInterview, InterviewSession, InterviewStatus};

/// Renders interview lists as terminal tables.
pub struct TableFormatter {
    use_colors: bool,
}

impl TableFormatter {
    /// Colours enabled when the terminal supports them.
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
        }
    }

    /// Forces colours on or off.
    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// One row per completed interview
    pub fn format_history(&self, items: &[CompletedInterview]) -> String {
        let mut table = self.create_base_table();
        table.set_header(header(&["ID", "Category", "Date", "Duration", "Score", "Answers"]));

        for item in items {
            let session = &item.session;
            table.add_row(vec![
                Cell::new(&session.id.to_string()[..8]),
                Cell::new(session.category.title()),
                Cell::new(&item.date_label),
                Cell::new(&item.duration_label),
                self.score_cell(session.score),
                Cell::new(session.responses.len()),
            ]);
        }

        table.to_string()
    }

    /// Question index, answer, and feedback for every saved response
    pub fn format_responses(&self, session: &InterviewSession) -> String {
        let mut table = self.create_base_table();
        table.set_header(header(&["#", "Answer", "Feedback"]));

        for response in session.responses.values() {
            table.add_row(vec![
                Cell::new(response.question_index + 1),
                Cell::new(truncate(&response.answer, 60)),
                Cell::new(truncate(&response.feedback, 80)),
            ]);
        }

        table.to_string()
    }

    /// Status cell, coloured when enabled.
    pub fn status_cell(&self, status: InterviewStatus) -> Cell {
        let cell = Cell::new(status.as_str());
        if !self.use_colors {
            return cell;
        }
        match status {
            InterviewStatus::Completed => cell.fg(Color::Green),
            InterviewStatus::InProgress => cell.fg(Color::Yellow),
        }
    }

    fn score_cell(&self, score: Option<u8>) -> Cell {
        let Some(score) = score else {
            return Cell::new("-");
        };
        let cell = Cell::new(format!("{score}%"));
        if !self.use_colors {
            return cell;
        }
        match score {
            90..=100 => cell.fg(Color::Green),
            75..=89 => cell.fg(Color::Yellow),
            _ => cell.fg(Color::Red),
        }
    }

    fn create_base_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        if !self.use_colors {
            table.force_no_tty();
        }
        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn header(titles: &[&str]) -> Vec<Cell> {
    titles
        .iter()
        .map(|t| Cell::new(t).add_attribute(Attribute::Bold))
        .collect()
}

/// Check if color output is supported
pub fn supports_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }
    !matches!(env::var("TERM").as_deref(), Ok("dumb"))
}
