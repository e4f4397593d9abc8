//! Configuration, constants and the tick driver.

pub mod config;
pub mod constants;
pub mod tick;

pub use config::{ConfigError, Difficulty, GameConfig};
pub use tick::{TickDriver, TickReport};
