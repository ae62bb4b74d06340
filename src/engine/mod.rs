//! Playback engine contract.
//!
//! The controller never renders anything itself; it hands a loaded
//! description to an engine created by an [`EngineFactory`] and drives it
//! with frame-range commands. `clock` provides a headless engine that only
//! tracks a playhead, which is what the terminal shell displays.

pub mod clock;

use std::time::Duration;

use serde::Serialize;

use crate::animation::AnimationDescription;
use crate::markers::FrameRange;

pub use clock::{FrameClockEngine, FrameClockFactory};

/// Renderer flags passed to every engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RendererSettings {
    /// Clear the canvas between frames
    pub clear_canvas: bool,
    /// Hide the surface while fully transparent
    pub hide_on_transparent: bool,
    /// Build layers lazily as they are first needed
    pub progressive_load: bool,
}

/// Fixed renderer configuration used for every load.
pub const DEFAULT_RENDERER_SETTINGS: RendererSettings = RendererSettings {
    clear_canvas: false,
    hide_on_transparent: true,
    progressive_load: true,
};

/// Options an engine instance is created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EngineOptions {
    pub renderer: RendererSettings,
    pub autoplay: bool,
    pub looped: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            renderer: DEFAULT_RENDERER_SETTINGS,
            autoplay: true,
            looped: true,
        }
    }
}

/// Handle to one live playback instance.
pub trait PlaybackEngine {
    /// Loop the inclusive frame range. With `force` the range replaces
    /// whatever is playing immediately and the playhead jumps to its start.
    fn play_segment(&mut self, range: FrameRange, force: bool);

    /// Move the playhead to `frame` and hold it there.
    fn go_to_and_stop(&mut self, frame: f64);

    /// Drop any range restriction so the whole animation plays again.
    fn reset_segments(&mut self, force: bool);

    /// Release the instance. No other call is valid afterwards.
    fn destroy(&mut self);

    /// Whether `go_to_and_stop` gives a visible preview.
    fn supports_seek(&self) -> bool {
        true
    }

    /// Advance the instance's own clock. Engines with an external driver
    /// ignore this.
    fn advance(&mut self, _elapsed: Duration) {}

    fn current_frame(&self) -> f64;

    fn is_paused(&self) -> bool;
}

/// Creates playback instances for loaded descriptions.
pub trait EngineFactory {
    type Engine: PlaybackEngine;

    fn create(&mut self, description: &AnimationDescription, options: &EngineOptions)
        -> Self::Engine;
}
