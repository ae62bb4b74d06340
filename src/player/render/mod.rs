//! Rendering components for the previewer.
//!
//! `draw` lays out one screen: header, status line, two rows of stat
//! readouts, the engine timeline, the segment slider and a footer. It also
//! records where the slider track ended up so mouse input can hit-test it.

mod help;
pub mod slider;
mod stats;
mod timeline;

pub use help::{help_area, render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use slider::{build_slider_chars, build_tick_labels, format_number, slider_line};
pub use stats::{animation_cells, segment_cells, StatCell};
pub use timeline::{build_timeline_chars, format_frame_counter, timeline_line};

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::controller::Session;
use crate::engine::PlaybackEngine;
use crate::player::state::{InputMode, ShellState};
use crate::theme::Theme;

/// Draw the whole previewer screen.
pub fn draw<E: PlaybackEngine>(
    frame: &mut Frame,
    session: Option<&Session<E>>,
    state: &mut ShellState,
    theme: &Theme,
) {
    let area = frame.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // status
            Constraint::Length(3), // animation stats
            Constraint::Length(3), // segment stats
            Constraint::Length(3), // timeline
            Constraint::Length(4), // slider + labels
            Constraint::Min(0),
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_header(frame, rows[0], session, state, theme);
    render_status(frame, rows[1], state, theme);
    render_cells(frame, rows[2], &animation_cells(session), theme);
    render_cells(frame, rows[3], &segment_cells(session), theme);
    render_timeline(frame, rows[4], session, theme);
    state.slider_area = render_slider(frame, rows[5], session, state, theme);
    render_footer(frame, rows[7], state, theme);

    if state.mode == InputMode::Help {
        render_help(frame, area, theme);
    }
}

fn render_header<E>(
    frame: &mut Frame,
    area: Rect,
    session: Option<&Session<E>>,
    state: &ShellState,
    theme: &Theme,
) {
    let mut spans = vec![Span::styled(" lottie-scrub ", theme.accent_bold_style())];
    match session {
        Some(session) => {
            let title = session
                .meta()
                .name
                .clone()
                .or_else(|| session.source().map(|p| p.display().to_string()))
                .unwrap_or_else(|| "(unnamed)".to_string());
            spans.push(Span::styled(title, theme.text_style()));
        }
        None => spans.push(Span::styled(
            "no animation loaded - press o to open a file",
            theme.text_secondary_style(),
        )),
    }
    if let Some(path) = &state.loading {
        spans.push(Span::styled(
            format!("  loading {}...", path.display()),
            theme.text_secondary_style(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status(frame: &mut Frame, area: Rect, state: &ShellState, theme: &Theme) {
    if let Some(status) = &state.status {
        let style = if status.is_error {
            theme.error_style()
        } else {
            theme.text_style()
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(format!(" {}", status.text), style))),
            area,
        );
    }
}

fn render_cells(frame: &mut Frame, area: Rect, cells: &[StatCell; 4], theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (cell, column) in cells.iter().zip(columns.iter()) {
        let line = Line::from(vec![
            Span::styled(format!("{}: ", cell.label), theme.text_style()),
            Span::styled(cell.value.clone(), theme.accent_style()),
        ]);
        let widget = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.text_secondary_style()),
        );
        frame.render_widget(widget, *column);
    }
}

fn render_timeline<E: PlaybackEngine>(
    frame: &mut Frame,
    area: Rect,
    session: Option<&Session<E>>,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.text_secondary_style());

    let Some(session) = session else {
        frame.render_widget(block.title(" Timeline "), area);
        return;
    };

    let total = session.meta().total_frames;
    let current = session.engine().current_frame();
    let looping = session.current_segment().map(|s| s.frame_range());
    let title = format!(" Timeline  {} ", format_frame_counter(current, total));
    let block = block.title(title);
    let inner = block.inner(area);

    let line = timeline_line(inner.width as usize, total, looping, current, theme);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Draw the slider and return the track cells.
fn render_slider<E>(
    frame: &mut Frame,
    area: Rect,
    session: Option<&Session<E>>,
    state: &ShellState,
    theme: &Theme,
) -> Option<Rect> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if state.dragging {
            theme.accent_style()
        } else {
            theme.text_secondary_style()
        });

    let Some(session) = session else {
        frame.render_widget(block.title(" Slider "), area);
        return None;
    };

    let range = session.slider_range();
    let slider = session.slider();
    let mut title = format!(
        " Slider  {} / {} ",
        format_number(slider.position),
        format_number(range.max)
    );
    if state.dragging {
        if let Some(pending) = session.pending_segment() {
            title.push_str(&format!("-> segment {} ", pending));
        }
    }
    let block = block.title(title);
    let inner = block.inner(area);
    let width = inner.width as usize;

    let ticks: Vec<(f64, String)> = session
        .ticks()
        .into_iter()
        .map(|tick| (range.ratio(tick.position), tick.label))
        .collect();
    let tick_ratios: Vec<f64> = ticks.iter().map(|(ratio, _)| *ratio).collect();

    let lines = vec![
        slider_line(width, range.ratio(slider.position), &tick_ratios, theme),
        Line::from(Span::styled(
            build_tick_labels(width, &ticks),
            theme.tick_style(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);

    (inner.height > 0).then(|| Rect::new(inner.x, inner.y, inner.width, 1))
}

fn render_footer(frame: &mut Frame, area: Rect, state: &ShellState, theme: &Theme) {
    let line = match state.mode {
        InputMode::OpenFile => Line::from(vec![
            Span::styled(" Open: ", theme.accent_bold_style()),
            Span::styled(format!("{}█", state.path_input), theme.text_style()),
        ]),
        _ => Line::from(Span::styled(
            " ←/→ drag  enter play  n/p segment  o open  r reload  ? help  q quit",
            theme.text_secondary_style(),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
