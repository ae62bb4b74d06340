//! Engine timeline: where the playhead is within the whole animation and
//! which frame range is looping.

use ratatui::text::{Line, Span};

use crate::markers::FrameRange;
use crate::player::render::slider::ratio_to_cell;
use crate::theme::Theme;

const OUTSIDE: char = '─';
const INSIDE: char = '═';
const PLAYHEAD: char = '┃';

fn frame_to_cell(frame: f64, total_frames: i64, width: usize) -> usize {
    if total_frames <= 0 {
        return 0;
    }
    ratio_to_cell(frame / total_frames as f64, width)
}

/// Build the timeline character array.
///
/// # Returns
/// `(cells, playhead)` where `playhead` is the cell holding the playhead.
pub fn build_timeline_chars(
    width: usize,
    total_frames: i64,
    looping: Option<FrameRange>,
    current_frame: f64,
) -> (Vec<char>, usize) {
    let mut cells = vec![OUTSIDE; width];
    if width == 0 {
        return (cells, 0);
    }

    if let Some(range) = looping {
        let start = frame_to_cell(range.start as f64, total_frames, width);
        let end = frame_to_cell(range.end as f64, total_frames, width);
        for cell in cells.iter_mut().take(end + 1).skip(start) {
            *cell = INSIDE;
        }
    }

    let playhead = frame_to_cell(current_frame, total_frames, width);
    cells[playhead] = PLAYHEAD;
    (cells, playhead)
}

/// Styled timeline line.
pub fn timeline_line(
    width: usize,
    total_frames: i64,
    looping: Option<FrameRange>,
    current_frame: f64,
    theme: &Theme,
) -> Line<'static> {
    let (cells, _) = build_timeline_chars(width, total_frames, looping, current_frame);
    let spans: Vec<Span<'static>> = cells
        .into_iter()
        .map(|c| {
            let style = match c {
                PLAYHEAD => theme.playhead_style(),
                INSIDE => theme.accent_style(),
                _ => theme.text_secondary_style(),
            };
            Span::styled(c.to_string(), style)
        })
        .collect();
    Line::from(spans)
}

/// `frame 12 / 90` readout.
pub fn format_frame_counter(current_frame: f64, total_frames: i64) -> String {
    format!("frame {} / {}", current_frame.floor() as i64, total_frames)
}
