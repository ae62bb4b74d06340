//! Play command handler

use std::path::PathBuf;

use anyhow::{bail, Result};
use tracing::info;

use lottie_scrub::logging;
use lottie_scrub::player::run_previewer;
use lottie_scrub::Config;

/// Launch the interactive previewer.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: Option<PathBuf>) -> Result<()> {
    if !atty::is(atty::Stream::Stdout) || !atty::is(atty::Stream::Stdin) {
        bail!("The previewer needs an interactive terminal; use `lottie-scrub info` for plain output");
    }

    let config = Config::load()?;
    match config.log_file() {
        Some(path) => logging::init_file(&config, &path)?,
        None => logging::init_stderr(&config),
    }
    info!(file = ?file, "starting previewer");

    run_previewer(file, &config)
}
