//! Formatting utilities for terminal output

use crate::core::letter_matches;
use crate::engine::Session;
use colored::Colorize;

/// Color each letter of `word`: green when it matches the target letter at
/// the same position, dimmed otherwise
#[must_use]
pub fn colorize_word(word: &str, target: &str) -> String {
    word.chars()
        .zip(letter_matches(word, target))
        .map(|(ch, in_place)| {
            let letter: String = ch.to_uppercase().collect();
            if in_place {
                letter.bright_green().bold().to_string()
            } else {
                letter.white().to_string()
            }
        })
        .collect()
}

/// Join a ladder with arrows
#[must_use]
pub fn format_path(history: &[String]) -> String {
    history
        .iter()
        .map(|word| word.to_uppercase())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Lines describing the current game
#[must_use]
pub fn game_state_lines(session: &Session, show_path: bool) -> Vec<String> {
    let target = session.target_word();
    let mut lines = vec![
        format!(
            "Start:  {}",
            session.start_word().to_uppercase().bright_yellow().bold()
        ),
        format!("Target: {}", target.to_uppercase().bright_cyan().bold()),
        format!("Steps:  {}", session.step_count()),
        String::new(),
    ];

    for (i, word) in session.history().iter().enumerate() {
        lines.push(format!(
            "  {:>2}. {}",
            i.to_string().bright_black(),
            colorize_word(word, target)
        ));
    }

    if show_path {
        lines.push(String::new());
        lines.push(format!("Path: {}", format_path(session.history())));
    }

    lines
}

/// Victory banner for a finished game
#[must_use]
pub fn win_lines(session: &Session) -> Vec<String> {
    let steps = session.step_count();
    vec![
        "═".repeat(60).bright_cyan().to_string(),
        "    🎉  L A D D E R   C O M P L E T E !  🎉    "
            .bright_green()
            .bold()
            .to_string(),
        "═".repeat(60).bright_cyan().to_string(),
        format!(
            "  {} → {} in {} {}",
            session.start_word().to_uppercase().bright_yellow(),
            session.target_word().to_uppercase().bright_cyan(),
            steps.to_string().bright_white().bold(),
            if steps == 1 { "step" } else { "steps" }
        ),
        format!("  Path: {}", format_path(session.history())),
    ]
}
