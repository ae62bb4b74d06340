//! Playback controller
//!
//! Sole owner of the playback instance. Every load tears down the previous
//! instance before the next one is created, so at most one is ever alive.
//!
//! Loads go through [`LoadTicket`]s: each file read is tagged with the
//! generation it was started in, and a result arriving after a newer read
//! has started is dropped.
//!
//! Operations issued while nothing is loaded are silently ignored so the
//! presentation layer can forward input without checking first.

mod state;

use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::animation::AnimationDescription;
use crate::engine::{EngineFactory, EngineOptions, PlaybackEngine};
use crate::error::{Result, ScrubError};
use crate::markers::{FrameRange, MarkerTable, IDLE_SEGMENT};

pub use state::{Session, SliderState};

/// Identifies one file read started through [`PlaybackController::begin_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// What happened to a finished file read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The animation replaced the current session
    Loaded,
    /// A newer read was started before this one finished
    Stale,
}

/// Drives a playback engine from marker segment selections.
pub struct PlaybackController<F: EngineFactory> {
    factory: F,
    options: EngineOptions,
    session: Option<Session<F::Engine>>,
    latest_ticket: u64,
    changed: bool,
}

impl<F: EngineFactory> PlaybackController<F> {
    pub fn new(factory: F) -> Self {
        Self::with_options(factory, EngineOptions::default())
    }

    pub fn with_options(factory: F, options: EngineOptions) -> Self {
        Self {
            factory,
            options,
            session: None,
            latest_ticket: 0,
            changed: false,
        }
    }

    pub fn session(&self) -> Option<&Session<F::Engine>> {
        self.session.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.session.is_some()
    }

    /// Returns true once after any state change, then resets.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    /// Start a new file read. Any ticket handed out earlier becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_ticket += 1;
        debug!(generation = self.latest_ticket, "load started");
        LoadTicket(self.latest_ticket)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest_ticket
    }

    /// Apply the result of a file read started with `ticket`.
    ///
    /// Stale results are discarded without touching the session. Read
    /// failures and malformed markers are returned with the current session
    /// left as it was.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<AnimationDescription>,
        source: Option<PathBuf>,
    ) -> Result<LoadOutcome> {
        if !self.is_current(ticket) {
            debug!(
                generation = ticket.0,
                latest = self.latest_ticket,
                "discarding stale load result"
            );
            return Ok(LoadOutcome::Stale);
        }

        let description = result.inspect_err(|e| warn!("load rejected: {}", e))?;
        self.load_with_source(description, source)?;
        Ok(LoadOutcome::Loaded)
    }

    /// Replace the current session with `description`.
    pub fn load_animation(&mut self, description: AnimationDescription) -> Result<()> {
        self.load_with_source(description, None)
    }

    fn load_with_source(
        &mut self,
        description: AnimationDescription,
        source: Option<PathBuf>,
    ) -> Result<()> {
        // Validate before teardown so a bad file leaves the old session playing
        let table = MarkerTable::build(&description.markers)
            .inspect_err(|e| warn!("load rejected: {}", e))?;

        self.teardown();

        let meta = description.meta();
        let mut engine = self.factory.create(&description, &self.options);

        let initial = match table.get(IDLE_SEGMENT) {
            Some(segment) => segment.frame_range(),
            None => FrameRange::new(0, meta.total_frames),
        };
        engine.play_segment(initial, true);

        info!(
            segments = table.len(),
            frames = meta.total_frames,
            fps = meta.frame_rate,
            "animation loaded"
        );

        self.session = Some(Session {
            engine,
            meta,
            table,
            slider: SliderState::default(),
            source,
        });
        self.changed = true;
        Ok(())
    }

    /// Destroy the playback instance, if any.
    pub fn unload(&mut self) {
        if self.teardown() {
            self.changed = true;
        }
    }

    fn teardown(&mut self) -> bool {
        match self.session.take() {
            Some(mut session) => {
                session.engine.destroy();
                debug!("playback instance destroyed");
                true
            }
            None => false,
        }
    }

    /// Loop segment `index`, replacing whatever range was playing.
    pub fn select_segment(&mut self, index: usize) -> Result<()> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        let (range, position) = match session.selector() {
            Some(selector) => (
                selector.resolve_frame_range(index)?,
                selector.index_to_position(index),
            ),
            None => return Err(ScrubError::IndexOutOfRange { index, len: 0 }),
        };

        session.engine.play_segment(range, true);
        session.slider = SliderState {
            position,
            current_segment: index,
        };
        self.changed = true;
        info!(index, start = range.start, end = range.end, "segment selected");
        Ok(())
    }

    /// Live slider feedback during a drag.
    ///
    /// Moves the slider and parks the playhead on the preview frame without
    /// changing which segment is looping.
    pub fn scrub_to(&mut self, position: f64) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let position = session.slider_range().clamp(position);
        session.slider.position = position;

        if session.engine.supports_seek() {
            let frame = match session.selector() {
                Some(selector) => {
                    let index = selector.position_to_index(position);
                    selector
                        .resolve_frame_range(index)
                        .map(|range| range.start as f64)
                        .ok()
                }
                None => Some(position),
            };
            if let Some(frame) = frame {
                session.engine.go_to_and_stop(frame);
            }
        }
        self.changed = true;
    }

    /// Commit a slider release at `position`.
    pub fn commit(&mut self, position: f64) -> Result<()> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        let index = session
            .selector()
            .map(|selector| selector.position_to_index(position));
        let index = match index {
            Some(index) => index,
            None => {
                // No segments: resume full-range looping from the scrubbed frame
                let position = session.slider_range().clamp(position);
                session.engine.reset_segments(false);
                session
                    .engine
                    .play_segment(FrameRange::new(0, session.meta.total_frames), false);
                session.slider.position = position;
                self.changed = true;
                return Ok(());
            }
        };

        debug!(position, index, "slider committed");
        self.select_segment(index)
    }

    /// Commit the slider where it currently is.
    pub fn commit_current(&mut self) -> Result<()> {
        match self.session.as_ref() {
            Some(session) => self.commit(session.slider.position),
            None => Ok(()),
        }
    }

    pub fn select_next(&mut self) -> Result<()> {
        self.step_segment(1)
    }

    pub fn select_previous(&mut self) -> Result<()> {
        self.step_segment(-1)
    }

    fn step_segment(&mut self, delta: isize) -> Result<()> {
        let target = self.session.as_ref().and_then(|s| {
            s.selector().map(|selector| {
                s.slider
                    .current_segment
                    .saturating_add_signed(delta)
                    .clamp(selector.first_selectable(), selector.last_selectable())
            })
        });
        match target {
            Some(index) => self.select_segment(index),
            None => Ok(()),
        }
    }

    /// Select the lowest segment reachable through the slider.
    pub fn select_first(&mut self) -> Result<()> {
        let first = self
            .session
            .as_ref()
            .and_then(|s| s.selector())
            .map(|selector| selector.first_selectable());
        match first {
            Some(index) => self.select_segment(index),
            None => Ok(()),
        }
    }

    pub fn select_last(&mut self) -> Result<()> {
        let last = self
            .session
            .as_ref()
            .and_then(|s| s.selector())
            .map(|selector| selector.last_selectable());
        match last {
            Some(index) => self.select_segment(index),
            None => Ok(()),
        }
    }

    /// Forward wall-clock time to the engine.
    pub fn tick(&mut self, elapsed: Duration) {
        if let Some(session) = self.session.as_mut() {
            session.engine.advance(elapsed);
        }
    }
}

impl<F: EngineFactory> Drop for PlaybackController<F> {
    fn drop(&mut self) {
        self.teardown();
    }
}
