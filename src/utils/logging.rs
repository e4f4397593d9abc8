//! File logging setup.
//!
//! The terminal belongs to the UI, so log lines go to a file instead of
//! stderr. Filtering follows `RUST_LOG` and defaults to `info`.

use crate::core::constants::{APP_NAME, LOG_FILE_NAME};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("no data directory available for the log file")]
    NoDataDir,
    #[error("cannot open log file {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("a global logger is already installed")]
    AlreadyInstalled(#[from] tracing_subscriber::util::TryInitError),
}

/// `<data dir>/romaji-snake/romaji-snake.log`, if a home directory is known.
pub fn default_log_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_local_dir().join(LOG_FILE_NAME))
}

/// Install the global subscriber, appending to `path` or the default file.
/// Returns the path written to.
pub fn init(path: Option<&Path>) -> Result<PathBuf, LoggingError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_log_path().ok_or(LoggingError::NoDataDir)?,
    };
    let file = open_log_file(&path)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;

    Ok(path)
}

fn open_log_file(path: &Path) -> Result<fs::File, LoggingError> {
    let open = || -> io::Result<fs::File> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(path)
    };
    open().map_err(|source| LoggingError::Open {
        path: path.to_path_buf(),
        source,
    })
}
