//! Snake scene rendering.
//!
//! The board is drawn from `render(session)` with half-block pixels: each
//! terminal row packs two board rows into `▀` characters (fg = upper cell,
//! bg = lower cell), and each cell is two columns wide so it looks square.

use super::answer_field::AnswerField;
use super::game_common::{
    render_game_over, render_info_frame, render_status, split_screen, GameOverCard,
};
use crate::input::ControlScheme;
use crate::snake::logic::render;
use crate::snake::types::{CellKind, GameSession};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const HALF_TOP: char = '\u{2580}'; // ▀
const FULL_BLOCK: char = '\u{2588}'; // █
const CELL_WIDTH: u16 = 2;

const HEAD_COLOR: Color = Color::Rgb(100, 255, 100);
const BODY_NEAR: (u8, u8, u8) = (40, 170, 40);
const BODY_FAR: (u8, u8, u8) = (20, 90, 30);
const FOOD_COLOR: Color = Color::Rgb(255, 80, 40);
const EMPTY_COLOR: Color = Color::Rgb(12, 12, 18);
const BORDER_COLOR: Color = Color::Rgb(80, 80, 80);

/// Render the whole game screen.
pub fn render_snake_scene(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    field: &AnswerField,
    scheme: ControlScheme,
) {
    if let Some(card) = GameOverCard::for_session(session) {
        render_game_over(frame, area, &card);
        return;
    }

    let layout = split_screen(frame, area, session, scheme);
    render_board(frame, layout.board, session);
    if let Some(remaining) = session.countdown_remaining() {
        render_countdown(frame, layout.board, remaining);
    }
    if let Some(prompt) = layout.prompt {
        render_prompt(frame, prompt, session, field);
    }
    render_status(frame, layout.status, session, scheme);
    render_info_panel(frame, layout.info, session, scheme);
}

/// Colour of every board cell. The body fades from neck to tail and the
/// food pulses with the step count.
fn board_pixels(session: &GameSession) -> Vec<Vec<Color>> {
    let food = food_color(session.tick_count);
    let mut pixels: Vec<Vec<Color>> = render(session)
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| match cell {
                    CellKind::Empty => EMPTY_COLOR,
                    CellKind::Food => food,
                    CellKind::SnakeHead => HEAD_COLOR,
                    CellKind::SnakeBody => body_color(0, 1),
                })
                .collect()
        })
        .collect();

    let len = session.snake.len();
    for (i, seg) in session.snake.iter().enumerate().skip(1) {
        pixels[seg.row as usize][seg.col as usize] = body_color(i - 1, len - 1);
    }
    pixels
}

/// `index` of `count` body segments, 0 nearest the head.
fn body_color(index: usize, count: usize) -> Color {
    let t = index as f64 / count.saturating_sub(1).max(1) as f64;
    let mix = |near: u8, far: u8| (near as f64 + (far as f64 - near as f64) * t) as u8;
    Color::Rgb(
        mix(BODY_NEAR.0, BODY_FAR.0),
        mix(BODY_NEAR.1, BODY_FAR.1),
        mix(BODY_NEAR.2, BODY_FAR.2),
    )
}

fn food_color(tick_count: u64) -> Color {
    let phase = (tick_count % 8) as f64 / 8.0 * std::f64::consts::TAU;
    let glow = phase.sin();
    Color::Rgb(255, (80.0 + glow * 30.0) as u8, (40.0 + glow * 20.0) as u8)
}

/// Pack pairs of pixel rows into half-block lines, merging runs of equal
/// colour into one span.
fn half_block_lines(pixels: &[Vec<Color>]) -> Vec<Line<'static>> {
    pixels
        .chunks(2)
        .map(|pair| {
            let upper = &pair[0];
            let lower = pair.get(1);
            let mut spans: Vec<Span<'static>> = Vec::new();
            let mut run: Option<(Color, Color, usize)> = None;

            for (col, &fg) in upper.iter().enumerate() {
                let bg = lower.map_or(Color::Reset, |row| row[col]);
                run = match run {
                    Some((f, b, n)) if f == fg && b == bg => Some((f, b, n + 1)),
                    Some((f, b, n)) => {
                        spans.push(half_block_span(f, b, n));
                        Some((fg, bg, 1))
                    }
                    None => Some((fg, bg, 1)),
                };
            }
            if let Some((f, b, n)) = run {
                spans.push(half_block_span(f, b, n));
            }
            Line::from(spans)
        })
        .collect()
}

fn half_block_span(fg: Color, bg: Color, cells: usize) -> Span<'static> {
    let text: String = std::iter::repeat(HALF_TOP)
        .take(cells * CELL_WIDTH as usize)
        .collect();
    Span::styled(text, Style::default().fg(fg).bg(bg))
}

/// Board inside a bordered box with the score in the title, centered in
/// `area`.
fn render_board(frame: &mut Frame, area: Rect, session: &GameSession) {
    let n = session.board_size() as u16;
    let width = (n * CELL_WIDTH + 2).min(area.width);
    let height = (n.div_ceil(2) + 2).min(area.height);
    if width < 5 || height < 3 {
        return;
    }

    let board = Rect::new(
        area.x + (area.width - width) / 2,
        area.y,
        width,
        height,
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_COLOR))
        .title(Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(BORDER_COLOR)),
            Span::styled(
                format!("{} ", session.score),
                Style::default().fg(Color::White),
            ),
        ]))
        .title_alignment(Alignment::Right);

    let lines = half_block_lines(&board_pixels(session));
    frame.render_widget(Paragraph::new(lines).block(block), board);
}

/// Word prompt and answer field below the board.
fn render_prompt(frame: &mut Frame, area: Rect, session: &GameSession, field: &AnswerField) {
    if area.height < 5 {
        return;
    }

    let labelled = |label: &'static str, text: &'static str, color: Color| {
        Line::from(vec![
            Span::styled(label, Style::default().fg(Color::DarkGray)),
            Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ])
    };
    let prompt = vec![
        labelled("Word:   ", session.challenge.display_word, Color::Yellow),
        labelled("Romaji: ", session.challenge.expected, Color::Green),
    ];
    frame.render_widget(Paragraph::new(prompt), Rect { height: 2, ..area });

    let field_area = Rect {
        y: area.y + 2,
        height: 3,
        ..area
    };
    field.draw(frame, field_area, session.is_running());
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &GameSession, scheme: ControlScheme) {
    let inner = render_info_frame(frame, area);

    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(label, Style::default().fg(Color::DarkGray)),
            Span::styled(value, Style::default().fg(Color::White)),
        ])
    };

    let mut lines = vec![
        row("Difficulty: ", session.difficulty().name().to_string()),
        row(
            "Speed: ",
            format!("{}ms", session.tick_interval().as_millis()),
        ),
        row("Score: ", session.score.to_string()),
        row("Length: ", session.snake.len().to_string()),
        Line::from(""),
        row("Grid: ", format!("{0}x{0}", session.board_size())),
        row("Heading: ", session.heading.name().to_string()),
    ];
    if scheme == ControlScheme::Typing {
        lines.push(row(
            "Turns: ",
            session.config.turn_policy.name().to_string(),
        ));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Legend:",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    let body = body_color(0, 1);
    for (color, name) in [(HEAD_COLOR, "Head"), (body, "Body"), (FOOD_COLOR, "Food")] {
        lines.push(Line::from(vec![
            Span::styled(format!(" {FULL_BLOCK} "), Style::default().fg(color)),
            Span::styled(name, Style::default().fg(Color::DarkGray)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// `[ Starting in N ]` across the middle of the board.
fn render_countdown(frame: &mut Frame, area: Rect, remaining: u32) {
    if area.height < 5 || area.width < 20 {
        return;
    }

    let text = format!("[ Starting in {remaining} ]");
    let width = (text.len() as u16).min(area.width);
    let spot = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + area.height / 2,
        width,
        1,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            text,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        spot,
    );
}
