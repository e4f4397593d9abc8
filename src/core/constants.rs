// Board and snake
pub const DEFAULT_BOARD_SIZE: i16 = 20;
pub const MIN_BOARD_SIZE: i16 = 3;
pub const MAX_BOARD_SIZE: i16 = 64;
pub const DEFAULT_INITIAL_LENGTH: usize = 3;

// Food placement
pub const DEFAULT_FOOD_INSET: i16 = 1;
pub const FOOD_SPAWN_MAX_ATTEMPTS: u32 = 256;

// Start-of-game countdown
pub const DEFAULT_COUNTDOWN_SECS: u32 = 5;
pub const COUNTDOWN_STEP_MS: u64 = 1000;

// Terminal loop
pub const INPUT_POLL_MS: u64 = 50;

// Files
pub const APP_NAME: &str = "romaji-snake";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "romaji-snake.log";
