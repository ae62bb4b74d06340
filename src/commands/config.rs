//! Config subcommands handler

use anyhow::Result;

use lottie_scrub::theme::Theme;
use lottie_scrub::Config;

fn theme_for(config: &Config) -> Theme {
    Theme::by_name(&config.player.theme).unwrap_or_default()
}

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = config.to_toml()?;
    if atty::is(atty::Stream::Stdout) {
        println!("{}", theme_for(&config).primary_text(&toml_str));
    } else {
        println!("{}", toml_str);
    }
    Ok(())
}

/// Print the config file path, noting when it does not exist yet.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    let path = Config::config_path()?;
    println!("{}", path.display());
    if !path.exists() && atty::is(atty::Stream::Stderr) {
        eprintln!(
            "{}",
            Theme::default().secondary_text("(not created yet, defaults are in effect)")
        );
    }
    Ok(())
}
