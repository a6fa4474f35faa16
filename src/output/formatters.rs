//! Formatting utilities for terminal output

use crate::core::{LetterVerdict, Verdict};
use colored::Colorize;

/// Paint a verdict line for immediate display
///
/// Exact letters render green and bold, present letters as a yellow `+`,
/// absent letters as a dimmed `-`. The plain rendering kept for the replay
/// view comes from [`Verdict::render`] instead.
#[must_use]
pub fn paint_verdict(verdict: &Verdict, guess: &str) -> String {
    verdict
        .letters()
        .iter()
        .zip(guess.chars())
        .map(|(mark, letter)| match mark {
            LetterVerdict::Exact => letter.to_string().bright_green().bold().to_string(),
            LetterVerdict::Present => "+".bright_yellow().to_string(),
            LetterVerdict::Absent => "-".bright_black().to_string(),
        })
        .collect()
}

/// Paint a winning word
#[must_use]
pub fn paint_win(word: &str) -> String {
    word.bright_green().bold().to_string()
}
