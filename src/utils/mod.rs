//! Utility modules: logging setup.

pub mod logging;
