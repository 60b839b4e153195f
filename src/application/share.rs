//! Share-text rendering.
//!
//! Human-readable rendering of one reflection, assembled on demand for the
//! platform share sheet. Never persisted.

use crate::domain::journal::DailyPrompt;

/// Banner line at the top of every shared reflection.
const BANNER: &str = "Speaking with Myself";

/// Renders a reflection as plain share text.
///
/// Format:
///
/// ```text
/// Speaking with Myself
/// March 7, 2024 • Focus • Day 7 (Carry)
///
/// Prompt: ...
///
/// My Reflection: ...
/// ```
///
/// The reflection line is omitted for unanswered records.
pub fn render(prompt: &DailyPrompt) -> String {
    let mut text = format!(
        "{}\n{} • {} • Day {} ({})\n\nPrompt: {}\n",
        BANNER,
        prompt.date().long_format(),
        prompt.topic(),
        prompt.day_number(),
        prompt.day_label(),
        prompt.question(),
    );
    if let Some(response) = prompt.response() {
        text.push_str(&format!("\nMy Reflection: {}", response));
    }
    text
}
