//! Session and slider state owned by the playback controller.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::animation::AnimationMeta;
use crate::markers::{MarkerTable, Segment, SegmentSelector, SliderRange, SliderTick};

/// Slider position and the segment currently looping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderState {
    /// Position inside the session's slider range
    pub position: f64,
    /// Index of the segment the engine is looping
    pub current_segment: usize,
}

impl Default for SliderState {
    fn default() -> Self {
        Self {
            position: 0.0,
            current_segment: 0,
        }
    }
}

/// Everything that belongs to one loaded animation.
///
/// Created wholesale by a successful load and dropped wholesale by the next
/// one; the engine handle never outlives it.
#[derive(Debug)]
pub struct Session<E> {
    pub(super) engine: E,
    pub(super) meta: AnimationMeta,
    pub(super) table: MarkerTable,
    pub(super) slider: SliderState,
    pub(super) source: Option<PathBuf>,
}

impl<E> Session<E> {
    pub fn meta(&self) -> &AnimationMeta {
        &self.meta
    }

    pub fn table(&self) -> &MarkerTable {
        &self.table
    }

    pub fn slider(&self) -> SliderState {
        self.slider
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// File the session was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// `None` when the animation has no markers.
    pub fn selector(&self) -> Option<SegmentSelector<'_>> {
        SegmentSelector::new(&self.table)
    }

    pub fn has_segments(&self) -> bool {
        !self.table.is_empty()
    }

    pub fn current_segment(&self) -> Option<&Segment> {
        self.table.get(self.slider.current_segment)
    }

    /// Slider bounds: the selector's range, or the whole animation when
    /// there are no markers.
    pub fn slider_range(&self) -> SliderRange {
        match self.selector() {
            Some(selector) => selector.slider_range(),
            None => SliderRange::new(0.0, self.meta.total_frames as f64),
        }
    }

    pub fn ticks(&self) -> Vec<SliderTick> {
        self.selector()
            .map(|selector| selector.ticks())
            .unwrap_or_default()
    }

    /// Segment a commit at the current slider position would select.
    pub fn pending_segment(&self) -> Option<usize> {
        self.selector()
            .map(|selector| selector.position_to_index(self.slider.position))
    }
}
