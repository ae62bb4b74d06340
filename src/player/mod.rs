//! Terminal previewer
//!
//! Shows the loaded animation's facts, the engine timeline and a segment
//! slider that can be dragged with the keyboard or mouse. Releasing the
//! slider plays the segment nearest to where it was let go.
//!
//! # Architecture
//!
//! The previewer is organized into submodules:
//! - `state`: ShellState and shared types (InputMode, InputResult, StatusMessage)
//! - `input/`: Keyboard and mouse input handling
//! - `render/`: UI rendering (stat readouts, timeline, slider, help)
//! - `native`: Terminal setup and the event loop
//!
//! # Usage
//!
//! ```no_run
//! use lottie_scrub::config::Config;
//! use lottie_scrub::player::run_previewer;
//! use std::path::PathBuf;
//!
//! let config = Config::default();
//! run_previewer(Some(PathBuf::from("wave.json")), &config).unwrap();
//! ```

pub mod input;
mod native;
pub mod render;
pub mod state;

pub use native::run_previewer;
pub use state::{InputMode, InputResult, ShellState, StatusMessage};
