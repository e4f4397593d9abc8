//! Board geometry: positions, headings, bounds checks.

use serde::{Deserialize, Serialize};

/// Cardinal direction the snake travels in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    /// Returns the opposite heading.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// The two headings at a right angle to this one.
    pub fn perpendicular(&self) -> [Heading; 2] {
        if self.is_vertical() {
            [Heading::Left, Heading::Right]
        } else {
            [Heading::Up, Heading::Down]
        }
    }

    /// Returns the (d_row, d_col) delta for this heading.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

/// A cell on the board, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i16,
    pub col: i16,
}

impl Position {
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }
}

/// True iff `pos` lies on an `n`×`n` board.
pub fn is_inside(pos: Position, n: i16) -> bool {
    (0..n).contains(&pos.row) && (0..n).contains(&pos.col)
}

/// `pos` moved one cell towards `heading`. The result may be off the board.
pub fn step(pos: Position, heading: Heading) -> Position {
    let (d_row, d_col) = heading.delta();
    Position {
        row: pos.row + d_row,
        col: pos.col + d_col,
    }
}

/// Cells between `pos` and the board edge when travelling towards `heading`.
pub fn clearance(pos: Position, heading: Heading, n: i16) -> i16 {
    match heading {
        Heading::Up => pos.row,
        Heading::Down => n - 1 - pos.row,
        Heading::Left => pos.col,
        Heading::Right => n - 1 - pos.col,
    }
}
