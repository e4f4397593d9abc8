//! Input sources and dispatch.
//!
//! Every way of playing (typed answers, arrow keys, scripted test input)
//! produces the same [`GameInput`] events. [`apply_input`] is the single
//! place they touch the session.

use crate::core::constants::INPUT_POLL_MS;
use crate::core::tick::TickDriver;
use crate::snake::grid::Heading;
use crate::snake::logic::{set_difficulty, steer, submit_answer};
use crate::snake::types::GameSession;
use crate::ui::answer_field::AnswerField;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// How the player changes heading.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ControlScheme {
    /// Transcribe the shown word to turn.
    #[default]
    Typing,
    /// Steer directly with the arrow keys.
    Arrows,
}

/// UI-agnostic input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameInput {
    /// A submitted transcription.
    Answer(String),
    /// A direct heading proposal.
    Steer(Heading),
    CycleDifficulty,
    /// Start over. Only honoured after game over.
    Restart,
    Quit,
}

/// Result of applying one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    /// The answer matched; the caller should clear its text field.
    AnswerAccepted,
    Restarted,
    Quit,
}

/// Anything that can produce game input.
pub trait InputSource {
    /// Next input, or `None` if nothing is pending. May wait briefly.
    fn next_input(&mut self, session: &GameSession) -> io::Result<Option<GameInput>>;
}

/// Apply one input to the session.
pub fn apply_input<R: Rng>(
    session: &mut GameSession,
    driver: &mut TickDriver,
    input: GameInput,
    rng: &mut R,
) -> InputResult {
    match input {
        GameInput::Answer(text) => {
            if submit_answer(session, &text, rng).matched {
                InputResult::AnswerAccepted
            } else {
                InputResult::Continue
            }
        }
        GameInput::Steer(heading) => {
            steer(session, heading);
            InputResult::Continue
        }
        GameInput::CycleDifficulty => {
            let next = session.difficulty().next();
            set_difficulty(session, next);
            InputResult::Continue
        }
        GameInput::Restart => {
            if !session.is_game_over() {
                return InputResult::Continue;
            }
            driver.restart(session, rng);
            InputResult::Restarted
        }
        GameInput::Quit => InputResult::Quit,
    }
}

/// Pre-recorded inputs, handed out one per call.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<GameInput>,
}

impl ScriptedInput {
    pub fn new(inputs: impl IntoIterator<Item = GameInput>) -> Self {
        Self {
            queue: inputs.into_iter().collect(),
        }
    }

    pub fn push(&mut self, input: GameInput) {
        self.queue.push_back(input);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn next_input(&mut self, _session: &GameSession) -> io::Result<Option<GameInput>> {
        Ok(self.queue.pop_front())
    }
}

/// Keyboard input from the terminal. Owns the answer being typed.
pub struct TerminalInput {
    scheme: ControlScheme,
    pub field: AnswerField,
}

impl TerminalInput {
    pub fn new(scheme: ControlScheme) -> Self {
        Self {
            scheme,
            field: AnswerField::new(),
        }
    }

    pub fn scheme(&self) -> ControlScheme {
        self.scheme
    }

    /// Map one key press. Text editing keys update the field and yield
    /// nothing.
    pub fn map_key(&mut self, key: KeyEvent, game_over: bool) -> Option<GameInput> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(GameInput::Quit);
        }
        match key.code {
            KeyCode::Esc => return Some(GameInput::Quit),
            KeyCode::Tab => return Some(GameInput::CycleDifficulty),
            _ => {}
        }

        if game_over {
            return match key.code {
                KeyCode::Enter => Some(GameInput::Restart),
                _ => None,
            };
        }

        match self.scheme {
            ControlScheme::Typing => match key.code {
                KeyCode::Enter => Some(GameInput::Answer(self.field.text().to_string())),
                KeyCode::Char(c) => {
                    self.field.handle_char_input(c);
                    None
                }
                KeyCode::Backspace => {
                    self.field.handle_backspace();
                    None
                }
                KeyCode::Left => {
                    self.field.move_cursor_left();
                    None
                }
                KeyCode::Right => {
                    self.field.move_cursor_right();
                    None
                }
                _ => None,
            },
            ControlScheme::Arrows => match key.code {
                KeyCode::Up | KeyCode::Char('w') => Some(GameInput::Steer(Heading::Up)),
                KeyCode::Down | KeyCode::Char('s') => Some(GameInput::Steer(Heading::Down)),
                KeyCode::Left | KeyCode::Char('a') => Some(GameInput::Steer(Heading::Left)),
                KeyCode::Right | KeyCode::Char('d') => Some(GameInput::Steer(Heading::Right)),
                _ => None,
            },
        }
    }
}

impl InputSource for TerminalInput {
    fn next_input(&mut self, session: &GameSession) -> io::Result<Option<GameInput>> {
        if !event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(self.map_key(key, session.is_game_over())),
            _ => Ok(None),
        }
    }
}
