//! Stat readouts for the loaded animation and the current segment.

use crate::controller::Session;
use crate::player::render::slider::format_number;

/// One labeled readout cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCell {
    pub label: &'static str,
    pub value: String,
}

impl StatCell {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

const NONE: &str = "-";

/// Animation facts: marker pairs, frame rate, total frames, dimensions.
pub fn animation_cells<E>(session: Option<&Session<E>>) -> [StatCell; 4] {
    match session {
        Some(session) => {
            let meta = session.meta();
            [
                StatCell::new("Markers", session.table().len().to_string()),
                StatCell::new("FPS", format_number(meta.frame_rate)),
                StatCell::new("Frames", meta.total_frames.to_string()),
                StatCell::new("W/H", format!("{}/{}", meta.width, meta.height)),
            ]
        }
        None => [
            StatCell::new("Markers", NONE),
            StatCell::new("FPS", NONE),
            StatCell::new("Frames", NONE),
            StatCell::new("W/H", NONE),
        ],
    }
}

/// Current segment: index, frame count, start and end frame.
pub fn segment_cells<E>(session: Option<&Session<E>>) -> [StatCell; 4] {
    let current = session.and_then(|s| s.current_segment().map(|seg| (s.slider(), seg)));
    match current {
        Some((slider, segment)) => [
            StatCell::new("Current Marker", slider.current_segment.to_string()),
            StatCell::new("M. Frames", segment.frame_count().to_string()),
            StatCell::new("M. F. Start", segment.start_frame.to_string()),
            StatCell::new("M. F. End", segment.end_frame.to_string()),
        ],
        None => {
            // No markers: the whole animation is the implicit segment
            let total = session.map(|s| s.meta().total_frames.to_string());
            [
                StatCell::new("Current Marker", NONE),
                StatCell::new("M. Frames", total.clone().unwrap_or_else(|| NONE.into())),
                StatCell::new("M. F. Start", if total.is_some() { "0" } else { NONE }),
                StatCell::new("M. F. End", total.unwrap_or_else(|| NONE.into())),
            ]
        }
    }
}
