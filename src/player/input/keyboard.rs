//! Keyboard input handling for the previewer.
//!
//! Arrow keys drag the slider (live scrub), Enter/Space release it (commit).
//! Segment keys select directly without going through the slider.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::controller::PlaybackController;
use crate::engine::EngineFactory;
use crate::error::Result;
use crate::player::state::{InputMode, InputResult, ShellState, StatusMessage};

/// Handle a keyboard event.
pub fn handle_key_event<F: EngineFactory>(
    key: KeyEvent,
    state: &mut ShellState,
    controller: &mut PlaybackController<F>,
) -> InputResult {
    match state.mode {
        InputMode::Help => {
            // Any key closes help
            state.toggle_help();
            InputResult::Continue
        }
        InputMode::OpenFile => handle_prompt_key(key, state),
        InputMode::Normal => handle_normal_key(key, state, controller),
    }
}

fn handle_prompt_key(key: KeyEvent, state: &mut ShellState) -> InputResult {
    match key.code {
        KeyCode::Enter => match state.finish_open_prompt() {
            Some(path) => InputResult::Open(path),
            None => InputResult::Continue,
        },
        KeyCode::Esc => {
            state.cancel_open_prompt();
            InputResult::Continue
        }
        KeyCode::Backspace => {
            state.path_input.pop();
            state.needs_render = true;
            InputResult::Continue
        }
        KeyCode::Char(c) => {
            state.path_input.push(c);
            state.needs_render = true;
            InputResult::Continue
        }
        _ => InputResult::Continue,
    }
}

fn handle_normal_key<F: EngineFactory>(
    key: KeyEvent,
    state: &mut ShellState,
    controller: &mut PlaybackController<F>,
) -> InputResult {
    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Overlays / files ===
        KeyCode::Char('?') => {
            state.toggle_help();
            InputResult::Continue
        }
        KeyCode::Char('o') => {
            let current = controller.session().and_then(|s| s.source());
            state.start_open_prompt(current);
            InputResult::Continue
        }
        KeyCode::Char('r') => match controller.session().and_then(|s| s.source()) {
            Some(path) => InputResult::Open(path.to_path_buf()),
            None => {
                state.set_status(StatusMessage::info("Nothing to reload"));
                InputResult::Continue
            }
        },

        // === Slider drag / release ===
        KeyCode::Left => {
            drag_by(state, controller, -1.0, key.modifiers);
            InputResult::Continue
        }
        KeyCode::Right => {
            drag_by(state, controller, 1.0, key.modifiers);
            InputResult::Continue
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.dragging = false;
            report(state, controller.commit_current());
            InputResult::Continue
        }

        // === Direct segment selection ===
        KeyCode::Char('n') | KeyCode::Tab | KeyCode::Down => {
            state.dragging = false;
            report(state, controller.select_next());
            InputResult::Continue
        }
        KeyCode::Char('p') | KeyCode::BackTab | KeyCode::Up => {
            state.dragging = false;
            report(state, controller.select_previous());
            InputResult::Continue
        }
        KeyCode::Home => {
            state.dragging = false;
            report(state, controller.select_first());
            InputResult::Continue
        }
        KeyCode::End => {
            state.dragging = false;
            report(state, controller.select_last());
            InputResult::Continue
        }
        // Segment 0 is the idle loop and only ever plays on load
        KeyCode::Char(c @ '1'..='9') => {
            if controller.is_loaded() {
                state.dragging = false;
                let index = c as usize - '0' as usize;
                report(state, controller.select_segment(index));
            }
            InputResult::Continue
        }
        KeyCode::Char('0') => {
            state.dragging = false;
            report(state, controller.select_first());
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}

/// Move the slider by one step (five with Shift) in `direction`.
fn drag_by<F: EngineFactory>(
    state: &mut ShellState,
    controller: &mut PlaybackController<F>,
    direction: f64,
    modifiers: KeyModifiers,
) {
    let Some(session) = controller.session() else {
        return;
    };
    let range = session.slider_range();
    let multiplier = if modifiers.contains(KeyModifiers::SHIFT) {
        5.0
    } else {
        1.0
    };
    let step = (range.width() * state.scrub_step * multiplier).max(1.0);
    let target = session.slider().position + direction * step;

    controller.scrub_to(target);
    state.dragging = true;
    state.needs_render = true;
}

/// Surface a failed operation in the status line.
fn report(state: &mut ShellState, result: Result<()>) {
    match result {
        Ok(()) => {
            if state.status.as_ref().is_some_and(|s| s.is_error) {
                state.status = None;
            }
            state.needs_render = true;
        }
        Err(e) => state.set_status(StatusMessage::error(e.to_string())),
    }
}
