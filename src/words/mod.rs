//! Word challenges: the vocabulary and answer checking.

pub mod logic;
pub mod vocabulary;

pub use logic::{check_answer, draw_challenge, Challenge};
pub use vocabulary::VOCABULARY;
