pub mod answer_field;
pub mod game_common;
pub mod snake_scene;

use crate::input::TerminalInput;
use crate::snake::types::GameSession;
use ratatui::Frame;

/// Draw one frame of the game.
pub fn draw_game(frame: &mut Frame, session: &GameSession, input: &TerminalInput) {
    let size = frame.size();
    snake_scene::render_snake_scene(frame, size, session, &input.field, input.scheme());
}
