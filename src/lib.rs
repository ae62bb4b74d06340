//! lottie-scrub: preview animations and scrub through their marker segments
//!
//! Reads an animation description, pairs its markers into frame segments and
//! drives a playback engine from a continuous slider whose release snaps to
//! the nearest segment.

pub mod animation;
pub mod cli;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod loader;
pub mod logging;
pub mod markers;
pub mod player;
pub mod theme;

pub use animation::{AnimationDescription, AnimationMeta, RawMarker};
pub use config::Config;
pub use controller::{LoadOutcome, LoadTicket, PlaybackController, Session, SliderState};
pub use engine::{EngineFactory, FrameClockEngine, FrameClockFactory, PlaybackEngine};
pub use error::{Result, ScrubError};
pub use markers::{FrameRange, MarkerTable, Segment, SegmentSelector};
