//! Spinner shown while waiting on the generator.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const SPINNER_TEMPLATE: &str = "[{elapsed_precise}] {spinner:.green} {msg}";
const SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Spinner with `message`, drawn on stderr.
///
/// Hidden when `visible` is false so JSON output stays clean.
pub fn create_spinner(message: impl Into<String>, visible: bool) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if !visible {
        spinner.set_draw_target(ProgressDrawTarget::hidden());
    }
    let style = ProgressStyle::default_spinner()
        .template(SPINNER_TEMPLATE)
        .map_or_else(|_| ProgressStyle::default_spinner(), |s| s.tick_chars(SPINNER_CHARS));
    spinner.set_style(style);
    spinner.set_message(message.into());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
