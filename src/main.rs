//! lottie-scrub CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use lottie_scrub::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { file } => commands::play::handle(file),
        Commands::Info { file, json } => commands::info::handle(&file, json),
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
