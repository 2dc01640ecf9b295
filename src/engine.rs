use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::words::WordSource;

/// A round ends in a loss once this many wrong letters have been submitted.
pub const MAX_INCORRECT_GUESSES: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    InProgress,
    Won,
    Lost,
}

/// Counters spanning rounds within one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub rounds_played: u32,
    pub wins: u32,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GuessError {
    #[error("Please enter a valid single letter. Input: '{0}'.")]
    InvalidInput(String),
    #[error("You've already guessed '{0}' this round.")]
    DuplicateGuess(char),
    #[error("The round is over. Start a new round to keep guessing.")]
    GameAlreadyOver,
}

/// Read-only view of the engine for rendering. The presentation layer holds
/// no state of its own; it redraws from this after every action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Secret word with unguessed letters masked, e.g. `c a _`.
    pub word_display: String,
    /// Letters guessed so far, in the order they were submitted.
    pub guessed_letters: Vec<char>,
    pub remaining_attempts: u8,
    pub round: RoundState,
    pub stats: SessionStats,
    /// The secret word, revealed only once the round has ended.
    pub revealed_word: Option<String>,
}

/// Owns all game state. Guesses, round transitions, and session bookkeeping
/// go through here; the word supply is pluggable so tests can script it.
pub struct GameEngine<W: WordSource> {
    words: W,
    secret: String,
    guessed: Vec<char>,
    incorrect: u8,
    round: RoundState,
    stats: SessionStats,
}

impl<W: WordSource> GameEngine<W> {
    /// Creates the engine and starts the first round, which counts toward
    /// `rounds_played` like every later one.
    pub fn new(words: W) -> Self {
        let mut engine = Self {
            words,
            secret: String::new(),
            guessed: Vec::new(),
            incorrect: 0,
            round: RoundState::InProgress,
            stats: SessionStats::default(),
        };
        engine.start_new_round();
        engine
    }

    /// Validates and applies one guess. The new `RoundState` is computed as
    /// part of the same transition and returned; on any error the prior
    /// state is left untouched.
    pub fn submit_guess(&mut self, input: &str) -> Result<RoundState, GuessError> {
        if self.round != RoundState::InProgress {
            return Err(GuessError::GameAlreadyOver);
        }

        let mut chars = input.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_lowercase(),
            _ => return Err(GuessError::InvalidInput(input.to_string())),
        };

        if self.guessed.contains(&letter) {
            return Err(GuessError::DuplicateGuess(letter));
        }

        self.guessed.push(letter);
        if !self.secret.contains(letter) {
            self.incorrect += 1;
        }

        self.round = self.evaluate_round_state();
        Ok(self.round)
    }

    /// Pure and idempotent; `submit_guess` calls this once per accepted
    /// letter and nothing else ever flips the round state.
    pub fn evaluate_round_state(&self) -> RoundState {
        if self.secret.chars().all(|c| self.guessed.contains(&c)) {
            RoundState::Won
        } else if self.incorrect >= MAX_INCORRECT_GUESSES {
            RoundState::Lost
        } else {
            RoundState::InProgress
        }
    }

    /// Banks a win for the round being replaced, bumps the round counter,
    /// and deals a fresh word. Repeat words are allowed.
    pub fn start_new_round(&mut self) {
        if self.round == RoundState::Won {
            self.stats.wins += 1;
        }
        self.stats.rounds_played += 1;
        self.secret = self.words.random_word().to_ascii_lowercase();
        self.guessed.clear();
        self.incorrect = 0;
        self.round = RoundState::InProgress;
    }

    pub fn snapshot(&self) -> Snapshot {
        let word_display = self
            .secret
            .chars()
            .map(|c| if self.guessed.contains(&c) { c } else { '_' })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ");

        Snapshot {
            word_display,
            guessed_letters: self.guessed.clone(),
            remaining_attempts: MAX_INCORRECT_GUESSES - self.incorrect,
            round: self.round,
            stats: self.stats,
            revealed_word: (self.round != RoundState::InProgress).then(|| self.secret.clone()),
        }
    }

    pub fn round_state(&self) -> RoundState {
        self.round
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::WordSource;

    /// Deals words from a script instead of at random.
    struct ScriptedWords(Vec<&'static str>);

    impl WordSource for ScriptedWords {
        fn random_word(&mut self) -> String {
            if self.0.len() > 1 {
                self.0.remove(0).to_string()
            } else {
                self.0[0].to_string()
            }
        }
    }

    fn engine_with(word: &'static str) -> GameEngine<ScriptedWords> {
        GameEngine::new(ScriptedWords(vec![word]))
    }

    #[test]
    fn correct_guesses_reveal_letters_without_spending_attempts() {
        let mut engine = engine_with("cat");

        assert_eq!(engine.submit_guess("c"), Ok(RoundState::InProgress));
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.word_display, "c _ _");
        assert_eq!(snapshot.remaining_attempts, MAX_INCORRECT_GUESSES);

        assert_eq!(engine.submit_guess("z"), Ok(RoundState::InProgress));
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.word_display, "c _ _");
        assert_eq!(snapshot.remaining_attempts, MAX_INCORRECT_GUESSES - 1);

        engine.submit_guess("a").unwrap();
        assert_eq!(engine.snapshot().word_display, "c a _");

        assert_eq!(engine.submit_guess("t"), Ok(RoundState::Won));
        assert_eq!(engine.snapshot().word_display, "c a t");
    }

    #[test]
    fn round_is_lost_exactly_at_the_attempt_limit() {
        let mut engine = engine_with("dog");
        let wrong = ["x", "q", "z", "w", "k", "v", "j", "y", "f", "b"];

        for (i, letter) in wrong.iter().enumerate() {
            let state = engine.submit_guess(letter).unwrap();
            if i < wrong.len() - 1 {
                assert_eq!(state, RoundState::InProgress);
            } else {
                assert_eq!(state, RoundState::Lost);
            }
        }

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.remaining_attempts, 0);
        assert_eq!(snapshot.revealed_word.as_deref(), Some("dog"));
    }

    #[test]
    fn duplicate_guess_fails_and_leaves_state_unchanged() {
        let mut engine = engine_with("sun");

        engine.submit_guess("s").unwrap();
        let before = engine.snapshot();

        assert_eq!(engine.submit_guess("s"), Err(GuessError::DuplicateGuess('s')));
        assert_eq!(engine.snapshot(), before);
        assert_eq!(engine.snapshot().guessed_letters, vec!['s']);
    }

    #[test]
    fn duplicate_check_is_case_insensitive() {
        let mut engine = engine_with("sun");

        engine.submit_guess("S").unwrap();
        assert_eq!(engine.submit_guess("s"), Err(GuessError::DuplicateGuess('s')));
        assert_eq!(engine.snapshot().word_display, "s _ _");
    }

    #[test]
    fn invalid_input_is_rejected_without_mutation() {
        let mut engine = engine_with("cat");
        let before = engine.snapshot();

        for input in ["12", "", "ab", "$", "1", " "] {
            assert_eq!(
                engine.submit_guess(input),
                Err(GuessError::InvalidInput(input.to_string()))
            );
        }

        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn guessing_after_the_round_ended_fails() {
        let mut engine = engine_with("at");

        engine.submit_guess("a").unwrap();
        assert_eq!(engine.submit_guess("t"), Ok(RoundState::Won));
        assert_eq!(engine.submit_guess("x"), Err(GuessError::GameAlreadyOver));
    }

    #[test]
    fn evaluate_round_state_is_idempotent() {
        let mut engine = engine_with("at");
        engine.submit_guess("a").unwrap();
        engine.submit_guess("t").unwrap();

        assert_eq!(engine.evaluate_round_state(), RoundState::Won);
        assert_eq!(engine.evaluate_round_state(), RoundState::Won);
    }

    #[test]
    fn new_round_resets_guesses_and_attempts() {
        let mut engine = GameEngine::new(ScriptedWords(vec!["cat", "dog"]));
        engine.submit_guess("c").unwrap();
        engine.submit_guess("z").unwrap();

        engine.start_new_round();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.word_display, "_ _ _");
        assert!(snapshot.guessed_letters.is_empty());
        assert_eq!(snapshot.remaining_attempts, MAX_INCORRECT_GUESSES);
        assert_eq!(snapshot.round, RoundState::InProgress);
    }

    #[test]
    fn wins_are_banked_only_for_won_rounds() {
        let mut engine = GameEngine::new(ScriptedWords(vec!["at", "at", "at"]));
        assert_eq!(engine.stats(), SessionStats { rounds_played: 1, wins: 0 });

        // Round 1 won.
        engine.submit_guess("a").unwrap();
        engine.submit_guess("t").unwrap();
        engine.start_new_round();
        assert_eq!(engine.stats(), SessionStats { rounds_played: 2, wins: 1 });

        // Round 2 abandoned mid-play.
        engine.submit_guess("a").unwrap();
        engine.start_new_round();
        assert_eq!(engine.stats(), SessionStats { rounds_played: 3, wins: 1 });
    }

    #[test]
    fn lost_round_does_not_count_as_a_win() {
        let mut engine = GameEngine::new(ScriptedWords(vec!["dog", "dog"]));
        for letter in ["x", "q", "z", "w", "k", "v", "j", "y", "f", "b"] {
            engine.submit_guess(letter).unwrap();
        }
        assert_eq!(engine.round_state(), RoundState::Lost);

        engine.start_new_round();
        assert_eq!(engine.stats(), SessionStats { rounds_played: 2, wins: 0 });
    }

    #[test]
    fn secret_word_stays_hidden_while_round_is_in_progress() {
        let mut engine = engine_with("cat");
        assert_eq!(engine.snapshot().revealed_word, None);

        engine.submit_guess("c").unwrap();
        assert_eq!(engine.snapshot().revealed_word, None);
    }
}
