//! Screen chrome around the board: the framed layout, the status line, the
//! info panel frame and the end-of-game card. Everything here reads the
//! session directly, so the scene only decides where things go.

use crate::input::ControlScheme;
use crate::snake::types::{AnswerFeedback, GameOverCause, GameSession, Phase};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 24;
/// Word, hint and the three-row answer box.
const PROMPT_HEIGHT: u16 = 5;
const STATUS_HEIGHT: u16 = 2;

/// Where each part of the screen goes.
pub struct ScreenLayout {
    pub board: Rect,
    /// Word prompt and answer box; only for the typing scheme.
    pub prompt: Option<Rect>,
    pub status: Rect,
    pub info: Rect,
}

/// Terminal rows the board needs: two cells per row plus top and bottom border.
pub fn board_rows(session: &GameSession) -> u16 {
    (session.board_size() as u16).div_ceil(2) + 2
}

/// Draw the outer frame and split the inside.
///
/// ```text
/// ┌─ Romaji Snake · Normal ─────────┬─ Info ──────┐
/// │   [board]                       │             │
/// │   [prompt, typing only]         │  [info]     │
/// │   [status - 2 lines]            │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn split_screen(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    scheme: ControlScheme,
) -> ScreenLayout {
    frame.render_widget(Clear, area);

    let border = match session.phase {
        Phase::Countdown { .. } => Color::Yellow,
        _ => Color::LightGreen,
    };
    let block = Block::default()
        .title(format!(" Romaji Snake · {} ", session.difficulty().name()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(INFO_PANEL_WIDTH)])
        .split(inner);

    let prompt_height = match scheme {
        ControlScheme::Typing => PROMPT_HEIGHT,
        ControlScheme::Arrows => 0,
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(board_rows(session)),
            Constraint::Length(prompt_height),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(columns[0]);

    ScreenLayout {
        board: rows[0],
        prompt: (prompt_height > 0).then_some(rows[1]),
        status: rows[2],
        info: columns[1],
    }
}

/// Message shown above the key hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub color: Color,
}

pub fn status_line(session: &GameSession, scheme: ControlScheme) -> StatusLine {
    let (text, color) = match (session.phase, scheme) {
        (Phase::Countdown { remaining }, _) => (format!("Starting in {remaining}..."), Color::Yellow),
        (Phase::GameOver(_), _) => ("Game over.".to_string(), Color::Red),
        (Phase::Running, ControlScheme::Arrows) => ("Slither!".to_string(), Color::Green),
        (Phase::Running, ControlScheme::Typing) => match session.feedback {
            AnswerFeedback::Correct => (
                format!("Correct! Turning {}.", session.next_heading.name()),
                Color::Green,
            ),
            AnswerFeedback::Incorrect => ("Incorrect, try again.".to_string(), Color::Red),
            AnswerFeedback::None => (
                "Type the romaji and press Enter to turn.".to_string(),
                Color::Gray,
            ),
        },
    };
    StatusLine { text, color }
}

/// (key, action) pairs for the control scheme.
pub fn key_hints(scheme: ControlScheme) -> &'static [(&'static str, &'static str)] {
    match scheme {
        ControlScheme::Typing => &[("[Enter]", "Submit"), ("[Tab]", "Speed"), ("[Esc]", "Quit")],
        ControlScheme::Arrows => &[("[Arrows]", "Steer"), ("[Tab]", "Speed"), ("[Esc]", "Quit")],
    }
}

/// Status message on the first line, key hints on the second.
pub fn render_status(frame: &mut Frame, area: Rect, session: &GameSession, scheme: ControlScheme) {
    if area.height < 1 {
        return;
    }

    let status = status_line(session, scheme);
    frame.render_widget(
        Paragraph::new(status.text)
            .style(Style::default().fg(status.color))
            .alignment(Alignment::Center),
        Rect { height: 1, ..area },
    );

    if area.height < 2 {
        return;
    }
    let spans: Vec<Span> = key_hints(scheme)
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let gap = if i > 0 { "  " } else { "" };
            [
                Span::raw(gap),
                Span::styled(*key, Style::default().fg(Color::White)),
                Span::styled(format!(" {action}"), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

/// Bordered " Info " box. Returns the inside for the panel lines.
pub fn render_info_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Summary shown once the run has ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOverCard {
    /// Only a full board counts as a win.
    pub won: bool,
    pub title: &'static str,
    pub message: &'static str,
    pub detail: String,
}

impl GameOverCard {
    /// `None` while the session is still playable.
    pub fn for_session(session: &GameSession) -> Option<Self> {
        let Phase::GameOver(cause) = session.phase else {
            return None;
        };
        let (won, title, message) = match cause {
            GameOverCause::BoardFilled => {
                (true, ":: BOARD CLEARED ::", "There is no room left for food.")
            }
            GameOverCause::Wall => (false, "GAME OVER", "The snake hit the wall."),
            GameOverCause::SelfCollision => (false, "GAME OVER", "The snake ran into itself."),
        };
        Some(Self {
            won,
            title,
            message,
            detail: format!(
                "Score: {}   Length: {}   Difficulty: {}",
                session.score,
                session.snake.len(),
                session.difficulty().name()
            ),
        })
    }

    fn color(&self) -> Color {
        if self.won {
            Color::Green
        } else {
            Color::Red
        }
    }
}

/// Full-area card with the run summary and the restart hint.
pub fn render_game_over(frame: &mut Frame, area: Rect, card: &GameOverCard) {
    frame.render_widget(Clear, area);

    let color = card.color();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            card.title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(card.message, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(
            card.detail.as_str(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Play again   [Esc] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let height = lines.len() as u16;
    let top = inner.y + inner.height.saturating_sub(height) / 2;
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        Rect::new(inner.x, top, inner.width, height.min(inner.height)),
    );
}
