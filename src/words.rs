use rand::Rng;

/// Word supply for the engine. Anything that can hand out one word per round
/// works here; the built-in list is what the game ships with and tests swap
/// in a scripted source instead.
pub trait WordSource {
    /// Returns the secret word for a new round. Draws are independent, so
    /// the same word may come up twice in a row.
    fn random_word(&mut self) -> String;
}

const WORDS: &[&str] = &[
    "rocket", "planet", "galaxy", "comet", "orbit", "launch", "lander",
    "meteor", "nebula", "gravity", "eclipse", "satellite", "asteroid",
    "cosmos", "thruster", "payload", "mission", "voyager",
];

/// Uniform draw from the fixed built-in list.
#[derive(Debug, Default)]
pub struct BuiltinWords;

impl WordSource for BuiltinWords {
    fn random_word(&mut self) -> String {
        let mut rng = rand::rng();
        WORDS[rng.random_range(0..WORDS.len())].to_string()
    }
}
