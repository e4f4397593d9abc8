//! Snake game: board geometry, session state and transitions.

pub mod grid;
pub mod logic;
pub mod turn_policy;
pub mod types;

pub use grid::{Heading, Position};
pub use logic::{advance, render, restart, set_difficulty, steer, submit_answer};
pub use turn_policy::TurnPolicy;
pub use types::{
    AnswerFeedback, AnswerOutcome, CellKind, GameOverCause, GameSession, Phase, StepOutcome,
};
