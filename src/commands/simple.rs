//! Simple interactive CLI mode
//!
//! Line-based word ladder game without TUI

use crate::engine::{GameEngine, GameError, MoveOutcome};
use crate::output::formatters::{game_state_lines, win_lines};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

const HELP: &str = "Commands: ':quit' to exit, ':reset' to restart, ':new' for a new game,\n\
                    ':path' / ':errors' / ':random' to toggle settings, ':help' for this list";

/// Run the simple CLI mode on stdin/stdout
///
/// The engine must already have a game in progress.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn run_simple<R: Rng>(engine: &mut GameEngine<R>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(engine, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the game loop over arbitrary input and output
///
/// Returns when the player quits, declines another game, or input ends.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn play<R: Rng>(
    engine: &mut GameEngine<R>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                   Word Ladder - Simple Mode                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Change one letter at a time to turn the start word into the target.")?;
    writeln!(out, "{HELP}\n")?;

    show_state(engine, out)?;

    loop {
        let Some(line) = prompt(input, out, "Enter a word")? else {
            return Ok(());
        };

        // Commands start with ':'; anything else is a guess
        let Some(command) = line.strip_prefix(':') else {
            if !line.is_empty() && !guess(engine, input, out, &line)? {
                return Ok(());
            }
            continue;
        };

        match command.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "help" | "?" => writeln!(out, "{HELP}\n")?,
            "reset" => {
                let result = engine.reset();
                restarted(engine, out, result, "Game reset!")?;
            }
            "new" => {
                let result = engine.new_game();
                restarted(engine, out, result, "New game started!")?;
            }
            "path" => {
                engine.set_show_path(!engine.show_path());
                writeln!(out, "Show path: {}\n", on_off(engine.show_path()))?;
                show_state(engine, out)?;
            }
            "errors" => {
                engine.set_show_error_message(!engine.show_error_message());
                writeln!(out, "Show errors: {}\n", on_off(engine.show_error_message()))?;
            }
            "random" => {
                engine.set_use_random_words(!engine.use_random_words());
                writeln!(
                    out,
                    "Random words for new games: {}\n",
                    on_off(engine.use_random_words())
                )?;
            }
            other => writeln!(out, "Unknown command ':{other}'. {HELP}\n")?,
        }
    }
}

/// Submit one guess; returns `false` when the player is done
fn guess<R: Rng>(
    engine: &mut GameEngine<R>,
    input: &mut impl BufRead,
    out: &mut impl Write,
    word: &str,
) -> io::Result<bool> {
    match engine.submit(word) {
        MoveOutcome::Accepted { won: false, .. } => show_state(engine, out)?,
        MoveOutcome::Accepted { won: true, .. } => {
            if let Some(session) = engine.session() {
                writeln!(out)?;
                for line in win_lines(session) {
                    writeln!(out, "{line}")?;
                }
                writeln!(out)?;
            }

            let answer = prompt(input, out, "Play again? (yes/no)")?.unwrap_or_default();
            if !matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(false);
            }
            let result = engine.new_game();
            restarted(engine, out, result, "New game started!")?;
        }
        MoveOutcome::Rejected(reason) => {
            if engine.show_error_message() {
                writeln!(out, "{} {reason}\n", "❌".red())?;
            }
        }
    }
    Ok(true)
}

/// Report a reset or new game; on failure the current game carries on
fn restarted<R: Rng>(
    engine: &GameEngine<R>,
    out: &mut impl Write,
    result: Result<(), GameError>,
    text: &str,
) -> io::Result<()> {
    match result {
        Ok(()) => {
            writeln!(out, "\n🔄 {text}\n")?;
            show_state(engine, out)
        }
        Err(err) => writeln!(out, "{} {err}\n", "❌".red()),
    }
}

fn show_state<R: Rng>(engine: &GameEngine<R>, out: &mut impl Write) -> io::Result<()> {
    if let Some(session) = engine.session() {
        writeln!(out, "{}", "─".repeat(60).cyan())?;
        for line in game_state_lines(session, engine.show_path()) {
            writeln!(out, "{line}")?;
        }
        writeln!(out, "{}\n", "─".repeat(60).cyan())?;
    }
    Ok(())
}

const fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

/// Read one trimmed line, or `None` at end of input
fn prompt(input: &mut impl BufRead, out: &mut impl Write, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
