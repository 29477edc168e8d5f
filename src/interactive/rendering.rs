//! TUI rendering with ratatui
//!
//! Layout for the word ladder interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::letter_matches;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Ladder
            Constraint::Percentage(50), // Puzzle info and messages
        ])
        .split(chunks[1]);

    render_ladder(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪜 WORD LADDER")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// One history word, letters already at their target position in green
fn ladder_line(index: usize, word: &str, target: &str) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{index:>3}  "),
        Style::default().fg(Color::DarkGray),
    )];

    for (ch, in_place) in word.chars().zip(letter_matches(word, target)) {
        let style = if in_place {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        };
        let letter: String = ch.to_uppercase().collect();
        spans.push(Span::styled(format!(" {letter} "), style));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

fn render_ladder<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let Some(session) = app.engine.session() else {
        let paragraph = Paragraph::new("No game in progress").block(
            Block::default()
                .title(" Ladder ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        f.render_widget(paragraph, area);
        return;
    };

    // Keep the newest words visible
    let visible = usize::from(area.height.saturating_sub(2)).max(1);
    let history = session.history();
    let skip = history.len().saturating_sub(visible);

    let items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, word)| ListItem::new(ladder_line(i, word, session.target_word())))
        .collect();

    let ladder = List::new(items).block(
        Block::default()
            .title(format!(" Ladder ({} steps) ", session.step_count()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(ladder, area);
}

fn render_info_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Puzzle
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_puzzle(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_puzzle<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let mut content = Vec::new();

    if let Some(session) = app.engine.session() {
        content.push(Line::from(vec![
            Span::raw("Start:  "),
            Span::styled(
                session.start_word().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        content.push(Line::from(vec![
            Span::raw("Target: "),
            Span::styled(
                session.target_word().to_uppercase(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        content.push(Line::from(format!("Steps:  {}", session.step_count())));

        if app.engine.show_path() {
            content.push(Line::from(""));
            content.push(Line::from(Span::styled(
                format!("Path: {}", session.path().to_uppercase()),
                Style::default().fg(Color::Magenta),
            )));
        }
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Puzzle ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Won => (
            " 🎉 CONGRATULATIONS! 🎉 | 'n' new game, 'r' replay, 'q' quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        InputMode::Playing => (
            format!(" Enter a {}-letter word ", app.word_length()),
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Won: {}",
        app.stats.games_played, app.stats.games_won
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let settings = app.engine.settings();
    let flag = |on: bool| if on { "on" } else { "off" };
    let flags_text = format!(
        "Errors: {} | Path: {} | Random: {}",
        flag(settings.show_error_message),
        flag(settings.show_path),
        flag(settings.use_random_words)
    );
    let flags = Paragraph::new(flags_text).alignment(Alignment::Center);
    f.render_widget(flags, chunks[1]);

    let help = Paragraph::new("F1/F2/F3: Toggle | F5: Reset | F6: New | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
