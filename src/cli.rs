//! Command-line flags and config layering.

use crate::build_info::BUILD_VERSION;
use crate::core::config::{ConfigError, Difficulty, GameConfig};
use crate::input::ControlScheme;
use crate::snake::turn_policy::TurnPolicy;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "romaji-snake")]
#[command(version = BUILD_VERSION)]
#[command(about = "Snake you steer by typing the romaji for Japanese words")]
pub struct Cli {
    /// Board width and height in cells
    #[arg(long)]
    pub board_size: Option<i16>,

    /// Starting snake length
    #[arg(long)]
    pub initial_length: Option<usize>,

    /// Speed tier
    #[arg(long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// How a correct answer picks the new heading
    #[arg(long, value_enum)]
    pub turn_policy: Option<TurnPolicy>,

    /// Seconds to wait before the snake starts moving
    #[arg(long)]
    pub countdown: Option<u32>,

    /// Border cells kept free of food
    #[arg(long)]
    pub food_inset: Option<i16>,

    /// Draw a new word whenever food is eaten
    #[arg(long)]
    pub redraw_on_food: bool,

    /// Type answers or steer with the arrow keys
    #[arg(long, value_enum)]
    pub controls: Option<ControlScheme>,

    /// Config file (TOML). Defaults to the per-user config if present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable logging
    #[arg(long)]
    pub no_log: bool,
}

impl Cli {
    /// Defaults, then the config file, then flags. The result is validated.
    pub fn resolve_config(&self) -> Result<GameConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::load_default_file()?,
        };
        let config = self.apply_overrides(base);
        config.validate()?;
        Ok(config)
    }

    /// Overlay the flags that were given on `config`.
    pub fn apply_overrides(&self, mut config: GameConfig) -> GameConfig {
        if let Some(n) = self.board_size {
            config.board_size = n;
        }
        if let Some(len) = self.initial_length {
            config.initial_length = len;
        }
        if let Some(d) = self.difficulty {
            config.difficulty = d;
        }
        if let Some(p) = self.turn_policy {
            config.turn_policy = p;
        }
        if let Some(secs) = self.countdown {
            config.countdown_secs = secs;
        }
        if let Some(inset) = self.food_inset {
            config.food_inset = inset;
        }
        if self.redraw_on_food {
            config.redraw_on_food = true;
        }
        if let Some(c) = self.controls {
            config.controls = c;
        }
        config
    }
}
