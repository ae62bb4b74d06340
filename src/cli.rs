//! Command-line interface definitions.
//!
//! Lives in the library so `xtask` can render the man page from the same
//! definitions the binary parses.

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Version string with build metadata.
pub fn version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| {
        let version = env!("CARGO_PKG_VERSION");
        match option_env!("VERGEN_GIT_SHA") {
            Some(sha) if sha != "unknown" => format!(
                "{} ({} {})",
                version,
                &sha[..sha.len().min(8)],
                env!("LOTTIE_SCRUB_BUILD_DATE")
            ),
            _ => version.to_string(),
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "lottie-scrub")]
#[command(about = "Preview animations and scrub through their marker segments")]
#[command(version = version())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive previewer
    Play {
        /// Animation description (JSON); open one later with `o` if omitted
        file: Option<PathBuf>,
    },
    /// Print animation facts and the segment table
    Info {
        /// Animation description (JSON)
        file: PathBuf,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
}
