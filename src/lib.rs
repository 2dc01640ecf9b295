pub mod engine;
pub mod tui;
pub mod words;

// Re-export for convenience
pub use engine::{GameEngine, GuessError, RoundState, SessionStats, Snapshot, MAX_INCORRECT_GUESSES};
pub use words::{BuiltinWords, WordSource};
