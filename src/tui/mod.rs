pub mod renderer;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tracing::{info, warn};

use crate::engine::{GameEngine, RoundState};
use crate::words::{BuiltinWords, WordSource};

/// Presentation layer: buffers keystrokes, forwards confirmed guesses to the
/// engine, and redraws from its snapshot. Holds no game state of its own.
pub struct App<W: WordSource> {
    engine: GameEngine<W>,
    input: String,
    message: String,
    quit: bool,
}

impl App<BuiltinWords> {
    pub fn new() -> Self {
        Self::with_words(BuiltinWords)
    }
}

impl Default for App<BuiltinWords> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: WordSource> App<W> {
    pub fn with_words(words: W) -> Self {
        Self {
            engine: GameEngine::new(words),
            input: String::new(),
            message: "Guess a letter and press Enter.".to_string(),
            quit: false,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.quit {
            let snapshot = self.engine.snapshot();
            terminal.draw(|f| renderer::render(f, &snapshot, &self.input, &self.message))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.quit = true;
            }
            KeyCode::Char(c) => {
                self.input.push(c);
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.confirm(),
            _ => {}
        }
    }

    /// Enter submits the buffered guess while the round runs; once the round
    /// is over the same key starts the next one.
    fn confirm(&mut self) {
        if self.engine.round_state() != RoundState::InProgress {
            self.engine.start_new_round();
            self.input.clear();
            self.message = "New round! Guess a letter and press Enter.".to_string();
            info!(stats = ?self.engine.stats(), "new round started");
            return;
        }

        let guess = std::mem::take(&mut self.input);
        match self.engine.submit_guess(&guess) {
            Ok(RoundState::Won) => {
                self.message = "🎉 You got it! Press Enter for a new round.".to_string();
                info!(stats = ?self.engine.stats(), "round won");
            }
            Ok(RoundState::Lost) => {
                self.message = "💀 Out of guesses! Press Enter for a new round.".to_string();
                info!(stats = ?self.engine.stats(), "round lost");
            }
            Ok(RoundState::InProgress) => {
                self.message = format!("Guessed '{}'.", guess.to_ascii_lowercase());
            }
            Err(err) => {
                warn!(%guess, %err, "guess rejected");
                self.message = err.to_string();
                // Leave the rejected text in place for editing.
                self.input = guess;
            }
        }
    }
}
