//! Game configuration: difficulty tiers, board parameters, and loading
//! from TOML.
//!
//! A `GameConfig` is validated once before a session is built. Nothing in the
//! game logic re-checks these bounds.

use super::constants::*;
use crate::input::ControlScheme;
use crate::snake::turn_policy::TurnPolicy;
use crate::snake::types::initial_snake;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Speed tier. Only the movement interval differs between tiers.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Extreme,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Extreme,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
            Self::Extreme => "Extreme",
        }
    }

    /// Movement interval in milliseconds (lower = faster).
    pub fn tick_interval_ms(&self) -> u64 {
        match self {
            Self::Easy => 2000,
            Self::Normal => 1500,
            Self::Hard => 1000,
            Self::Extreme => 300,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms())
    }

    /// Next tier, wrapping from Extreme back to Easy.
    pub fn next(&self) -> Self {
        let index = Self::ALL.iter().position(|d| d == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

/// Rejected configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("board size {size} is outside {min}..={max}")]
    BoardSize { size: i16, min: i16, max: i16 },
    #[error("initial snake length must be at least 1")]
    ZeroLength,
    #[error("a snake of length {length} does not fit on a {board_size}x{board_size} board")]
    SnakeTooLong { length: usize, board_size: i16 },
    #[error("food inset {inset} leaves no free cells on a {board_size}x{board_size} board")]
    EmptyInterior { inset: i16, board_size: i16 },
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Everything that parameterizes a session. Immutable for the life of a
/// session except `difficulty`, which can change live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub board_size: i16,
    pub initial_length: usize,
    pub difficulty: Difficulty,
    pub turn_policy: TurnPolicy,
    /// Seconds of countdown before the snake moves. Zero starts immediately.
    pub countdown_secs: u32,
    /// Border cells excluded from food placement.
    pub food_inset: i16,
    /// Also draw a new word whenever food is eaten.
    pub redraw_on_food: bool,
    pub controls: ControlScheme,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            initial_length: DEFAULT_INITIAL_LENGTH,
            difficulty: Difficulty::default(),
            turn_policy: TurnPolicy::default(),
            countdown_secs: DEFAULT_COUNTDOWN_SECS,
            food_inset: DEFAULT_FOOD_INSET,
            redraw_on_food: false,
            controls: ControlScheme::default(),
        }
    }
}

impl GameConfig {
    /// Check every bound the game logic relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let n = self.board_size;
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&n) {
            return Err(ConfigError::BoardSize {
                size: n,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        if self.initial_length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        // The body is laid out rightwards from the centre column.
        if self.initial_length > (n - n / 2) as usize {
            return Err(ConfigError::SnakeTooLong {
                length: self.initial_length,
                board_size: n,
            });
        }
        let inset = self.food_inset;
        // Compared before any arithmetic so huge values cannot overflow.
        if inset < 0 || inset > (n - 1) / 2 {
            return Err(ConfigError::EmptyInterior {
                inset,
                board_size: n,
            });
        }
        // The first food needs a cell the starting body does not cover.
        let side = (n - 2 * inset) as usize;
        let interior = inset..n - inset;
        let covered = initial_snake(n, self.initial_length)
            .iter()
            .filter(|p| interior.contains(&p.row) && interior.contains(&p.col))
            .count();
        if covered >= side * side {
            return Err(ConfigError::EmptyInterior {
                inset,
                board_size: n,
            });
        }
        Ok(())
    }

    /// Parse a TOML document. Missing keys fall back to defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a TOML file. The result is not validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Load the per-user config file if it exists, defaults otherwise.
    pub fn load_default_file() -> Result<Self, ConfigError> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Interval between movement steps for the current difficulty.
    pub fn tick_interval(&self) -> Duration {
        self.difficulty.tick_interval()
    }
}

/// `<config dir>/romaji-snake/config.toml`, if a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
