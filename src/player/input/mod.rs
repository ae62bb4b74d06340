//! Input handling for the previewer.
//!
//! Dispatches terminal events to the keyboard and mouse handlers and returns
//! control flow signals to the main loop.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::{column_to_position, handle_mouse_event};

use crossterm::event::{Event, KeyEventKind};

use crate::controller::PlaybackController;
use crate::engine::EngineFactory;
use crate::player::state::{InputResult, ShellState};

/// Handle any input event, dispatching to the appropriate handler.
pub fn handle_event<F: EngineFactory>(
    event: Event,
    state: &mut ShellState,
    controller: &mut PlaybackController<F>,
) -> InputResult {
    match event {
        // Windows reports both press and release
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            handle_key_event(key, state, controller)
        }
        Event::Mouse(mouse) => handle_mouse_event(mouse, state, controller),
        Event::Resize(_, _) => {
            state.needs_render = true;
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, paste, etc.
    }
}
