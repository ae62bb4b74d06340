//! Marker table construction.
//!
//! Markers are consumed strictly by position: marker `2i` opens segment `i`
//! and marker `2i + 1` closes it. Source order is authoritative, nothing is
//! sorted.

use serde::Serialize;

use crate::animation::RawMarker;
use crate::error::{Result, ScrubError};

/// Smallest marker count that forms a segment.
pub const MIN_PAIRED_MARKERS: usize = 2;

/// A paired frame range between two consecutive markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub index: usize,
    pub start_frame: i64,
    pub end_frame: i64,
    /// Name of the opening marker
    pub name: String,
}

/// Inclusive `[start, end]` frame range handed to the playback engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameRange {
    pub start: i64,
    pub end: i64,
}

impl FrameRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> i64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn contains(&self, frame: f64) -> bool {
        frame >= self.start as f64 && frame <= self.end as f64
    }
}

impl Segment {
    pub fn frame_range(&self) -> FrameRange {
        FrameRange::new(self.start_frame, self.end_frame)
    }

    /// Number of frames between the two boundaries.
    pub fn frame_count(&self) -> i64 {
        self.end_frame - self.start_frame
    }
}

/// Ordered, immutable list of segments for one loaded animation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MarkerTable {
    segments: Vec<Segment>,
}

impl MarkerTable {
    /// Pair up raw markers into segments.
    ///
    /// An empty list gives an empty table. Odd or too-short lists fail with
    /// [`ScrubError::MalformedMarkers`]; a pair whose start lies after its end
    /// fails with [`ScrubError::UnpairedSegment`].
    pub fn build(raw_markers: &[RawMarker]) -> Result<Self> {
        if raw_markers.is_empty() {
            return Ok(Self::default());
        }

        let count = raw_markers.len();
        if count % 2 != 0 || count < MIN_PAIRED_MARKERS {
            return Err(ScrubError::MalformedMarkers { count });
        }

        let segments = raw_markers
            .chunks_exact(2)
            .enumerate()
            .map(|(index, pair)| {
                let (start, end) = (&pair[0], &pair[1]);
                if start.time > end.time {
                    return Err(ScrubError::UnpairedSegment {
                        index,
                        start: start.time,
                        end: end.time,
                    });
                }
                Ok(Segment {
                    index,
                    start_frame: start.time,
                    end_frame: end.time,
                    name: start.name.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { segments })
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }
}
