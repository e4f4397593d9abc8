//! Drawing challenges and checking answers.

use super::vocabulary::VOCABULARY;
use rand::Rng;

/// A word to transcribe and the romaji that unlocks a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub display_word: &'static str,
    pub expected: &'static str,
}

/// Draw a uniformly random challenge. Repeats are allowed.
pub fn draw_challenge<R: Rng>(rng: &mut R) -> Challenge {
    let (display_word, expected) = VOCABULARY[rng.gen_range(0..VOCABULARY.len())];
    Challenge {
        display_word,
        expected,
    }
}

/// Case-insensitive exact match. Surrounding whitespace is significant.
pub fn check_answer(challenge: &Challenge, raw: &str) -> bool {
    !raw.is_empty() && raw.to_lowercase() == challenge.expected.to_lowercase()
}
