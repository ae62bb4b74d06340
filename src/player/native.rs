//! Interactive previewer loop.
//!
//! Owns the terminal, the background file loader and the playback
//! controller. Each pass drains finished loads, advances the engine clock,
//! redraws when something changed and then waits for input up to one tick.

use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, warn};

use super::input::handle_event;
use super::render::draw;
use super::state::{InputResult, ShellState, StatusMessage};
use crate::config::Config;
use crate::controller::{LoadOutcome, PlaybackController};
use crate::engine::{EngineFactory, FrameClockFactory, PlaybackEngine};
use crate::loader::{FileLoader, LoadResult};
use crate::theme::Theme;

/// Puts the terminal into raw mode on the alternate screen and restores it
/// when dropped, including on early returns and panics unwinding through.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter alternate screen");
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Run the previewer until the user quits.
///
/// `file` is loaded right away when given; otherwise the screen starts
/// empty and a file can be opened with `o`.
pub fn run_previewer(file: Option<PathBuf>, config: &Config) -> Result<()> {
    let theme = Theme::by_name(&config.player.theme).unwrap_or_default();
    let tick_rate = Duration::from_millis(config.player.tick_rate_ms);

    let loader = FileLoader::spawn();
    let mut controller = PlaybackController::new(FrameClockFactory);
    let mut state = ShellState::new(config.player.scrub_step);

    if let Some(path) = file {
        request_load(&mut controller, &loader, &mut state, path);
    }

    let mut guard = TerminalGuard::new()?;
    let mut last_tick = Instant::now();

    loop {
        while let Some(result) = loader.try_recv() {
            apply_load_result(&mut controller, &mut state, result);
        }

        let elapsed = last_tick.elapsed();
        last_tick = Instant::now();
        controller.tick(elapsed);

        // The playhead moves every tick while playing
        let playing = controller
            .session()
            .is_some_and(|s| !s.engine().is_paused());
        if controller.take_changed() || playing || state.needs_render {
            guard
                .terminal
                .draw(|frame| draw(frame, controller.session(), &mut state, &theme))?;
            state.needs_render = false;
        }

        if event::poll(tick_rate)? {
            match handle_event(event::read()?, &mut state, &mut controller) {
                InputResult::Continue => {}
                InputResult::Quit => break,
                InputResult::Open(path) => {
                    request_load(&mut controller, &loader, &mut state, path);
                }
            }
            state.needs_render = true;
        }
    }

    debug!("previewer closed");
    Ok(())
}

fn request_load<F: EngineFactory>(
    controller: &mut PlaybackController<F>,
    loader: &FileLoader,
    state: &mut ShellState,
    path: PathBuf,
) {
    let ticket = controller.begin_load();
    debug!(generation = ticket.generation(), path = %path.display(), "requesting load");
    loader.request(ticket, path.clone());
    state.loading = Some(path);
    state.needs_render = true;
}

/// Hand a finished read to the controller and report the outcome.
pub(crate) fn apply_load_result<F: EngineFactory>(
    controller: &mut PlaybackController<F>,
    state: &mut ShellState,
    result: LoadResult,
) {
    let LoadResult {
        ticket,
        path,
        result,
    } = result;

    match controller.finish_load(ticket, result, Some(path.clone())) {
        Ok(LoadOutcome::Loaded) => {
            state.loading = None;
            state.dragging = false;
            state.set_status(StatusMessage::info(format!("Loaded {}", file_label(&path))));
        }
        Ok(LoadOutcome::Stale) => {
            debug!(path = %path.display(), "ignoring superseded load");
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "load failed");
            state.loading = None;
            state.set_status(StatusMessage::error(e.to_string()));
        }
    }
    state.needs_render = true;
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
