//! Romaji answer box: a single-line text field with a char-indexed cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Single-line text field for the romaji answer.
#[derive(Debug, Clone, Default)]
pub struct AnswerField {
    input: String,
    /// Cursor position in chars, not bytes.
    cursor_position: usize,
}

impl AnswerField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw(&self, f: &mut Frame, area: Rect, enabled: bool) {
        let input_text = {
            let char_count = self.input.chars().count();
            if self.cursor_position < char_count {
                let chars: Vec<char> = self.input.chars().collect();
                let before: String = chars[..self.cursor_position].iter().collect();
                let after: String = chars[self.cursor_position..].iter().collect();
                format!("{}{}{}", before, "_", after)
            } else {
                format!("{}_", self.input)
            }
        };

        let color = if enabled { Color::White } else { Color::DarkGray };
        let input_widget = Paragraph::new(input_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Romaji ")
                    .border_style(Style::default().fg(color)),
            )
            .style(Style::default().fg(color));
        f.render_widget(input_widget, area);
    }

    pub fn handle_char_input(&mut self, c: char) {
        let byte_index = self.byte_index();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn handle_backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let byte_index = self.byte_index();
            self.input.remove(byte_index);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor_position = (self.cursor_position + 1).min(self.input.chars().count());
    }

    pub fn text(&self) -> &str {
        &self.input
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor_position = 0;
    }

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_position)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }
}
