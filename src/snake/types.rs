//! Snake session data structures.
//!
//! A `GameSession` is the only owner of the snake, the food and the current
//! word challenge. All mutation goes through `super::logic`.

use super::grid::{Heading, Position};
use crate::core::config::{Difficulty, GameConfig};
use crate::words::{draw_challenge, Challenge};
use rand::Rng;
use std::collections::VecDeque;
use std::time::Duration;

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    Wall,
    SelfCollision,
    /// No free cell left for food.
    BoardFilled,
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting to start; `remaining` whole seconds left.
    Countdown { remaining: u32 },
    Running,
    GameOver(GameOverCause),
}

/// Result of the most recent answer submission, for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnswerFeedback {
    /// Nothing submitted yet, or an empty submission.
    #[default]
    None,
    Correct,
    Incorrect,
}

/// What one board cell holds, for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    SnakeHead,
    SnakeBody,
    Food,
}

/// Outcome of one `advance`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub moved: bool,
    pub ate_food: bool,
    pub game_over: bool,
}

/// Outcome of one `submit_answer`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub matched: bool,
    /// Heading queued for the next step, when the answer earned a turn.
    pub new_heading: Option<Heading>,
}

/// One game from start to game over.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: GameConfig,
    pub phase: Phase,

    /// Body segments, head at index 0.
    pub snake: VecDeque<Position>,
    /// Heading used by the most recent step.
    pub heading: Heading,
    /// Heading the next step will use.
    pub next_heading: Heading,

    /// `None` only once the board is full.
    pub food: Option<Position>,
    pub challenge: Challenge,
    pub feedback: AnswerFeedback,

    pub score: u32,
    /// Movement steps taken.
    pub tick_count: u64,
}

impl GameSession {
    /// Start a session. `config` must already have passed
    /// [`GameConfig::validate`].
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Self {
        debug_assert!(config.validate().is_ok(), "unvalidated config: {config:?}");

        let phase = if config.countdown_secs > 0 {
            Phase::Countdown {
                remaining: config.countdown_secs,
            }
        } else {
            Phase::Running
        };

        let mut session = Self {
            snake: initial_snake(config.board_size, config.initial_length),
            heading: Heading::Left,
            next_heading: Heading::Left,
            food: None,
            challenge: draw_challenge(rng),
            feedback: AnswerFeedback::None,
            score: 0,
            tick_count: 0,
            phase,
            config,
        };
        session.food = super::logic::spawn_food(&session, rng);

        tracing::info!(
            board_size = session.config.board_size,
            difficulty = session.config.difficulty.name(),
            policy = session.config.turn_policy.name(),
            "session started"
        );
        session
    }

    pub fn board_size(&self) -> i16 {
        self.config.board_size
    }

    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    pub fn tick_interval(&self) -> Duration {
        self.config.tick_interval()
    }

    pub fn head(&self) -> Position {
        self.snake[0]
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Seconds left before the snake moves, if still counting down.
    pub fn countdown_remaining(&self) -> Option<u32> {
        match self.phase {
            Phase::Countdown { remaining } => Some(remaining),
            _ => None,
        }
    }
}

/// Horizontal body on the middle row: head at the centre column, tail
/// extending to the right, so the default Left heading moves away from it.
pub fn initial_snake(board_size: i16, length: usize) -> VecDeque<Position> {
    let center = board_size / 2;
    (0..length as i16)
        .map(|i| Position::new(center, center + i))
        .collect()
}
