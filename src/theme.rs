//! Color themes for the previewer and CLI output.
//!
//! Provides ratatui styles for the terminal UI and ANSI escape helpers for
//! plain command output.

use ratatui::style::{Color, Modifier, Style};

/// Named colors used across the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Labels and most content
    pub text_primary: Color,
    /// Dimmed hints and borders
    pub text_secondary: Color,
    /// Values and highlights
    pub accent: Color,
    /// Slider ticks (one per selectable segment)
    pub tick: Color,
    /// Slider knob and engine playhead
    pub playhead: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

impl Theme {
    /// Gray text, green values, yellow ticks.
    pub fn standard() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            tick: Color::Yellow,
            playhead: Color::White,
            error: Color::Red,
        }
    }

    /// White text, yellow values.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            tick: Color::Magenta,
            playhead: Color::White,
            error: Color::Red,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            tick: Color::LightBlue,
            playhead: Color::White,
            error: Color::Red,
        }
    }

    /// Look up a theme by its config name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "default" | "standard" => Some(Self::standard()),
            "classic" => Some(Self::classic()),
            "ocean" => Some(Self::ocean()),
            _ => None,
        }
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Key names in the help overlay.
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tick_style(&self) -> Style {
        Style::default().fg(self.tick)
    }

    pub fn playhead_style(&self) -> Style {
        Style::default()
            .fg(self.playhead)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Wrap text in the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text)
    }

    /// Wrap text in the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    /// Wrap text in the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    /// Wrap text in the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }
}

const ANSI_RESET: &str = "\x1b[0m";

fn paint(color: Color, text: &str) -> String {
    format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
}

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // RGB and indexed colors print uncolored
        _ => "",
    }
}
