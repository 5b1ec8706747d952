//! File logging.
//!
//! The terminal belongs to the TUI, so log lines go to a file. Verbosity is
//! taken from `RUST_LOG` and defaults to `info`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::Result;
use color_eyre::eyre::eyre;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::constants::{APP_NAME, LOG_FILE};

/// Default log location: `<cache dir>/assetdesk/assetdesk.log`.
///
/// # Errors
/// Returns an error if the platform has no cache directory.
pub fn default_log_path() -> Result<PathBuf> {
    let mut path = dirs::cache_dir().ok_or_else(|| eyre!("Could not determine cache directory"))?;
    path.push(APP_NAME);
    path.push(LOG_FILE);
    Ok(path)
}

/// Installs the global subscriber, appending to the file at `path`.
///
/// # Errors
/// Returns an error if the file cannot be opened or a subscriber is
/// already installed.
pub fn init(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()?;

    tracing::info!("{APP_NAME} {} starting", env!("CARGO_PKG_VERSION"));
    Ok(())
}
