//! Romaji Snake - a terminal snake game steered by typing romaji.
//!
//! This module exposes the game logic for testing and for other front ends.

pub mod build_info;
pub mod cli;
pub mod core;
pub mod input;
pub mod snake;
pub mod ui;
pub mod utils;
pub mod words;
