//! TUI application state and logic

use crate::engine::{GameEngine, GameError, MoveOutcome};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<R = StdRng> {
    pub engine: GameEngine<R>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    /// Input is locked until a reset or new game
    Won,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub total_steps: usize,
}

impl<R: Rng> App<R> {
    /// Wrap an engine that already has a game in progress
    #[must_use]
    pub fn new(engine: GameEngine<R>) -> Self {
        let mut app = Self {
            engine,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics {
                games_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Playing,
        };
        app.add_message(
            "Change one letter at a time to reach the target word.",
            MessageStyle::Info,
        );
        app
    }

    /// Letters expected per word in the current game
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.engine
            .current_word()
            .map_or(0, crate::core::word_len)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::F(1) => self.toggle_show_errors(),
            KeyCode::F(2) => self.toggle_show_path(),
            KeyCode::F(3) => self.toggle_random_words(),
            KeyCode::F(5) => self.reset_game(),
            KeyCode::F(6) => self.new_game(),
            _ => match self.input_mode {
                InputMode::Won => match key.code {
                    KeyCode::Char('q') => self.should_quit = true,
                    KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                    KeyCode::Char('r') => self.reset_game(),
                    _ => {}
                },
                InputMode::Playing => match key.code {
                    KeyCode::Char(c) if c.is_alphabetic() => {
                        // One key press is one letter, even if lowercasing expands it
                        if self.input_buffer.chars().count() < self.word_length() {
                            self.input_buffer.push(c.to_lowercase().next().unwrap_or(c));
                        }
                    }
                    KeyCode::Backspace => {
                        self.input_buffer.pop();
                    }
                    KeyCode::Enter => self.submit_input(),
                    _ => {}
                },
            },
        }
    }

    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let length = self.word_length();

        if input.chars().count() != length {
            self.add_message(
                &format!("Please enter a {length}-letter word"),
                MessageStyle::Error,
            );
            return;
        }

        match self.engine.submit(&input) {
            MoveOutcome::Accepted { word, won: false } => {
                self.add_message(
                    &format!("{} accepted", word.to_uppercase()),
                    MessageStyle::Info,
                );
            }
            MoveOutcome::Accepted { won: true, .. } => {
                let steps = self.engine.step_count();
                self.stats.games_won += 1;
                self.stats.total_steps += steps;
                self.input_mode = InputMode::Won;

                let celebration = match steps {
                    1 => "🎯 ONE STEP! Extraordinary! 🌟".to_string(),
                    2..=4 => format!("🔥 MAGNIFICENT! Solved in {steps} steps! 🔥"),
                    _ => format!("🎉 SOLVED in {steps} steps! 🎉"),
                };
                self.add_message(&celebration, MessageStyle::Success);
                self.add_message(
                    "Press 'n' for new game, 'r' to replay or 'q' to quit.",
                    MessageStyle::Info,
                );
            }
            MoveOutcome::Rejected(reason) => {
                if self.engine.show_error_message() {
                    self.add_message(&reason.to_string(), MessageStyle::Error);
                }
            }
        }
    }

    pub fn new_game(&mut self) {
        let result = self.engine.new_game();
        self.restarted(result, "New game started!");
    }

    pub fn reset_game(&mut self) {
        let result = self.engine.reset();
        self.restarted(result, "Game reset!");
    }

    fn restarted(&mut self, result: Result<(), GameError>, text: &str) {
        match result {
            Ok(()) => {
                self.stats.games_played += 1;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Playing;
                self.add_message(text, MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn toggle_show_errors(&mut self) {
        let value = !self.engine.show_error_message();
        self.engine.set_show_error_message(value);
        self.add_message(
            &format!("Error messages {}", if value { "on" } else { "off" }),
            MessageStyle::Info,
        );
    }

    pub fn toggle_show_path(&mut self) {
        let value = !self.engine.show_path();
        self.engine.set_show_path(value);
        self.add_message(
            &format!("Path display {}", if value { "on" } else { "off" }),
            MessageStyle::Info,
        );
    }

    pub fn toggle_random_words(&mut self) {
        let value = !self.engine.use_random_words();
        self.engine.set_use_random_words(value);
        self.add_message(
            &format!(
                "New games use {} words",
                if value { "random" } else { "the default" }
            ),
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
