//! Headless playback engine.
//!
//! Tracks a playhead that advances at the animation's frame rate and wraps
//! inside the active frame range. Nothing is drawn; the terminal shell reads
//! the playhead to show where playback is.

use std::time::Duration;

use tracing::trace;

use super::{EngineFactory, EngineOptions, PlaybackEngine};
use crate::animation::AnimationDescription;
use crate::markers::FrameRange;

/// Playhead-only engine instance.
#[derive(Debug, Clone)]
pub struct FrameClockEngine {
    frame_rate: f64,
    total_frames: i64,
    current_frame: f64,
    segment: Option<FrameRange>,
    paused: bool,
    looped: bool,
    destroyed: bool,
}

impl FrameClockEngine {
    pub fn new(frame_rate: f64, total_frames: i64, options: &EngineOptions) -> Self {
        Self {
            frame_rate: if frame_rate > 0.0 { frame_rate } else { 0.0 },
            total_frames: total_frames.max(0),
            current_frame: 0.0,
            segment: None,
            paused: !options.autoplay,
            looped: options.looped,
            destroyed: false,
        }
    }

    /// The range currently being looped (the whole animation when unset).
    pub fn active_range(&self) -> FrameRange {
        self.segment
            .unwrap_or_else(|| FrameRange::new(0, self.total_frames))
    }

    #[cfg(test)]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl PlaybackEngine for FrameClockEngine {
    fn play_segment(&mut self, range: FrameRange, force: bool) {
        if self.destroyed {
            return;
        }
        if force || !range.contains(self.current_frame) {
            self.current_frame = range.start as f64;
        }
        self.segment = Some(range);
        self.paused = false;
    }

    fn go_to_and_stop(&mut self, frame: f64) {
        if self.destroyed {
            return;
        }
        self.current_frame = frame;
        self.paused = true;
    }

    fn reset_segments(&mut self, force: bool) {
        if self.destroyed {
            return;
        }
        self.segment = None;
        if force {
            self.current_frame = 0.0;
        }
    }

    fn destroy(&mut self) {
        self.destroyed = true;
        self.paused = true;
        self.segment = None;
    }

    fn advance(&mut self, elapsed: Duration) {
        if self.paused || self.destroyed {
            return;
        }
        let range = self.active_range();
        let start = range.start as f64;
        let end = range.end as f64;

        self.current_frame += elapsed.as_secs_f64() * self.frame_rate;

        if self.current_frame > end {
            if self.looped && range.len() > 0 {
                self.current_frame = start + (self.current_frame - start) % (end - start);
            } else if self.looped {
                self.current_frame = start;
            } else {
                self.current_frame = end;
                self.paused = true;
            }
            trace!(frame = self.current_frame, "playhead wrapped");
        }
    }

    fn current_frame(&self) -> f64 {
        self.current_frame
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}

/// Factory for [`FrameClockEngine`] instances.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameClockFactory;

impl EngineFactory for FrameClockFactory {
    type Engine = FrameClockEngine;

    fn create(
        &mut self,
        description: &AnimationDescription,
        options: &EngineOptions,
    ) -> FrameClockEngine {
        FrameClockEngine::new(description.frame_rate, description.total_frames(), options)
    }
}
