//! Shell state
//!
//! Holds everything the terminal shell tracks on top of the controller:
//! input mode, the open-file prompt, the last status message, and where the
//! slider was drawn (for mouse hit-testing).

use std::path::PathBuf;

use ratatui::layout::Rect;

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow to the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Exit the previewer
    Quit,
    /// Start reading this file in the background
    Open(PathBuf),
}

/// What keystrokes currently mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Slider and segment keys
    #[default]
    Normal,
    /// Typing a path into the open-file prompt
    OpenFile,
    /// Help overlay visible; any key closes it
    Help,
}

/// One-line message shown under the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// State of the terminal shell.
#[derive(Debug)]
pub struct ShellState {
    pub mode: InputMode,
    /// Text typed into the open-file prompt
    pub path_input: String,
    pub status: Option<StatusMessage>,
    /// True between the first drag movement and the commit
    pub dragging: bool,
    /// Arrow-key slider step as a fraction of the range
    pub scrub_step: f64,
    /// File currently being read, if any
    pub loading: Option<PathBuf>,
    /// Slider track cells from the last draw
    pub slider_area: Option<Rect>,
    /// True when the screen must be redrawn
    pub needs_render: bool,
}

impl ShellState {
    pub fn new(scrub_step: f64) -> Self {
        Self {
            mode: InputMode::Normal,
            path_input: String::new(),
            status: None,
            dragging: false,
            scrub_step,
            loading: None,
            slider_area: None,
            needs_render: true,
        }
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
        self.needs_render = true;
    }

    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            InputMode::Help => InputMode::Normal,
            _ => InputMode::Help,
        };
        self.needs_render = true;
    }

    /// Open the path prompt, pre-filled with `current`.
    pub fn start_open_prompt(&mut self, current: Option<&std::path::Path>) {
        self.mode = InputMode::OpenFile;
        self.path_input = current
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        self.needs_render = true;
    }

    /// Leave the prompt, returning the trimmed path if one was typed.
    pub fn finish_open_prompt(&mut self) -> Option<PathBuf> {
        self.mode = InputMode::Normal;
        self.needs_render = true;
        let path = std::mem::take(&mut self.path_input);
        let path = path.trim();
        if path.is_empty() {
            None
        } else {
            Some(PathBuf::from(path))
        }
    }

    pub fn cancel_open_prompt(&mut self) {
        self.mode = InputMode::Normal;
        self.path_input.clear();
        self.needs_render = true;
    }
}
