//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence over the configured level. The terminal UI
//! owns the screen, so interactive sessions log to a file; everything else
//! logs to stderr.

use std::error::Error;
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level))
}

/// Log to stderr without timestamps or colors.
pub fn init_stderr(config: &Config) {
    installed(
        tracing_subscriber::fmt()
            .with_env_filter(env_filter(config))
            .with_writer(std::io::stderr)
            .without_time()
            .with_target(false)
            .try_init(),
    );
}

/// Log to `path`, appending.
pub fn init_file(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {:?}", parent))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {:?}", path))?;

    installed(
        tracing_subscriber::fmt()
            .with_env_filter(env_filter(config))
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init(),
    );
    Ok(())
}

/// Keep the first subscriber when one is already set.
fn installed(result: std::result::Result<(), Box<dyn Error + Send + Sync>>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            debug!("tracing subscriber already set, keeping it: {}", e);
            false
        }
    }
}
