use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::engine::{RoundState, Snapshot};

/// Pure rendering function: draws one frame from the engine snapshot plus
/// the app's input buffer and message line. No game logic in here.
pub fn render(frame: &mut Frame, snapshot: &Snapshot, input: &str, message: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Score
            Constraint::Length(3), // Word
            Constraint::Length(3), // Attempts
            Constraint::Length(3), // Guessed letters
            Constraint::Length(3), // Input
            Constraint::Length(3), // Message
            Constraint::Min(0),    // Help
        ])
        .split(frame.area());

    let header = Paragraph::new("🚀 ═══ GUESS THE WORD ═══ 🚀")
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    let score = Paragraph::new(format!(
        "Wins: {}   Rounds: {}",
        snapshot.stats.wins, snapshot.stats.rounds_played
    ))
    .block(Block::default().borders(Borders::ALL).title("Score"))
    .style(Style::default().fg(Color::Yellow));
    frame.render_widget(score, chunks[1]);

    let (word_text, word_color) = match (&snapshot.round, &snapshot.revealed_word) {
        (RoundState::Won, Some(word)) => (format!("🏆 You won! The word was '{}'.", word), Color::Green),
        (RoundState::Lost, Some(word)) => (format!("💀 You lost! The word was '{}'.", word), Color::Red),
        _ => (snapshot.word_display.clone(), Color::White),
    };
    let word = Paragraph::new(word_text)
        .block(Block::default().borders(Borders::ALL).title("Word"))
        .style(Style::default().fg(word_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(word, chunks[2]);

    let attempts = Paragraph::new(format!(
        "{} {}",
        snapshot.remaining_attempts,
        "❤".repeat(snapshot.remaining_attempts as usize)
    ))
    .block(Block::default().borders(Borders::ALL).title("Guesses left"))
    .style(Style::default().fg(Color::Red));
    frame.render_widget(attempts, chunks[3]);

    let guessed_text = if snapshot.guessed_letters.is_empty() {
        "None".to_string()
    } else {
        snapshot
            .guessed_letters
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };
    let guessed = Paragraph::new(guessed_text)
        .block(Block::default().borders(Borders::ALL).title("Guessed letters"))
        .style(Style::default().fg(Color::Cyan));
    frame.render_widget(guessed, chunks[4]);

    let input_widget = Paragraph::new(input)
        .block(Block::default().borders(Borders::ALL).title("Your guess"))
        .style(Style::default().fg(Color::White));
    frame.render_widget(input_widget, chunks[5]);

    let message_widget = Paragraph::new(message)
        .block(Block::default().borders(Borders::ALL).title("Message"))
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(message_widget, chunks[6]);

    let help = if snapshot.round == RoundState::InProgress {
        "💡 Type a letter, Enter to guess, Esc to quit"
    } else {
        "🏁 Round over! Enter for a new round, Esc to quit"
    };
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        chunks[7],
    );
}
