//! Log setup for the terminal host.
//!
//! The alternate screen owns stdout, so events go to a file in the data
//! directory. Filter with `FLAPPY_LOG` (same syntax as `RUST_LOG`).

use super::persistence::{ensure_dir, LOG_FILE};
use crate::error::StoreError;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::filter::EnvFilter;

pub const LOG_ENV: &str = "FLAPPY_LOG";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber, appending to `<dir>/flappy.log`.
/// Returns the log path.
pub fn init_file_logging(dir: &Path) -> Result<PathBuf, StoreError> {
    ensure_dir(dir)?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| StoreError::io(&path, e))?;

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(path)
}
