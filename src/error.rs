//! Errors raised while loading animations and selecting segments.

use std::path::PathBuf;

/// Errors that can occur in the marker table, selector and controller.
#[derive(Debug, thiserror::Error)]
pub enum ScrubError {
    #[error("Malformed markers: {count} marker(s) cannot be paired into segments")]
    MalformedMarkers { count: usize },

    #[error("Malformed markers: segment {index} starts at frame {start} but ends at frame {end}")]
    UnpairedSegment { index: usize, start: i64, end: i64 },

    #[error("Segment index {index} is out of range (table has {len} segment(s))")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unreadable animation file {}: {reason}", .path.display())]
    UnreadableFile { path: PathBuf, reason: String },

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(String),
}

impl ScrubError {
    /// True for both shapes of malformed marker input.
    pub fn is_malformed_markers(&self) -> bool {
        matches!(
            self,
            ScrubError::MalformedMarkers { .. } | ScrubError::UnpairedSegment { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ScrubError>;
