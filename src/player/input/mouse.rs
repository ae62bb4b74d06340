//! Mouse input handling for the previewer.
//!
//! Pressing or dragging on the slider track scrubs live; releasing the
//! button commits the position.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::controller::PlaybackController;
use crate::engine::EngineFactory;
use crate::markers::SliderRange;
use crate::player::state::{InputResult, ShellState, StatusMessage};

/// Map a terminal column on the slider track to a slider position.
///
/// Returns `None` when the column lies outside the track.
pub fn column_to_position(column: u16, track: Rect, range: SliderRange) -> Option<f64> {
    if track.width == 0 || column < track.x || column >= track.x + track.width {
        return None;
    }
    let cells = track.width.saturating_sub(1).max(1) as f64;
    let ratio = (column - track.x) as f64 / cells;
    Some(range.clamp(range.min + ratio.clamp(0.0, 1.0) * range.width()))
}

/// Handle a mouse event.
pub fn handle_mouse_event<F: EngineFactory>(
    mouse: MouseEvent,
    state: &mut ShellState,
    controller: &mut PlaybackController<F>,
) -> InputResult {
    let (Some(track), Some(session)) = (state.slider_area, controller.session()) else {
        return InputResult::Continue;
    };
    let range = session.slider_range();

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            let on_track = mouse.row == track.y;
            if !on_track && !state.dragging {
                return InputResult::Continue;
            }
            // Once dragging, keep following the column even off the row
            let column = mouse
                .column
                .clamp(track.x, track.x + track.width.saturating_sub(1));
            if let Some(position) = column_to_position(column, track, range) {
                controller.scrub_to(position);
                state.dragging = true;
                state.needs_render = true;
            }
        }
        MouseEventKind::Up(MouseButton::Left) if state.dragging => {
            state.dragging = false;
            if let Err(e) = controller.commit_current() {
                state.set_status(StatusMessage::error(e.to_string()));
            }
            state.needs_render = true;
        }
        _ => {}
    }

    InputResult::Continue
}
