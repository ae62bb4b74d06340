//! Slider rendering.
//!
//! Draws the continuous slider as a track with a knob and one tick per
//! selectable segment, plus a label row under the ticks.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

const TRACK: char = '─';
const FILLED: char = '━';
const KNOB: char = '●';
const TICK: char = '◆';

/// Cell a ratio in `[0, 1]` lands on in a track `width` cells wide.
pub fn ratio_to_cell(ratio: f64, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    let last = (width - 1) as f64;
    (ratio.clamp(0.0, 1.0) * last).round() as usize
}

/// Build the slider character array.
///
/// # Returns
/// `(track, knob)` where `knob` is the cell holding the knob. Ticks never
/// overwrite the knob.
pub fn build_slider_chars(width: usize, knob_ratio: f64, tick_ratios: &[f64]) -> (Vec<char>, usize) {
    let mut track = vec![TRACK; width];
    if width == 0 {
        return (track, 0);
    }

    let knob = ratio_to_cell(knob_ratio, width);
    for &ratio in tick_ratios {
        track[ratio_to_cell(ratio, width)] = TICK;
    }
    track[knob] = KNOB;

    (track, knob)
}

/// Styled slider line.
pub fn slider_line(width: usize, knob_ratio: f64, tick_ratios: &[f64], theme: &Theme) -> Line<'static> {
    let (track, knob) = build_slider_chars(width, knob_ratio, tick_ratios);

    let spans: Vec<Span<'static>> = track
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let (symbol, style): (char, Style) = match c {
                KNOB => (KNOB, theme.playhead_style()),
                TICK => (TICK, theme.tick_style()),
                _ if i < knob => (FILLED, theme.accent_style()),
                _ => (TRACK, theme.text_secondary_style()),
            };
            Span::styled(symbol.to_string(), style)
        })
        .collect();

    Line::from(spans)
}

/// Place labels under their ticks.
///
/// A label starts at its tick's cell and is shifted left to fit; labels that
/// would overlap the previous one are skipped.
pub fn build_tick_labels(width: usize, ticks: &[(f64, String)]) -> String {
    let mut row = String::with_capacity(width);
    let mut used = 0usize;

    for (ratio, label) in ticks {
        let label_width = label.width();
        if label_width == 0 || label_width > width {
            continue;
        }
        let cell = ratio_to_cell(*ratio, width).min(width - label_width);
        // Leave one blank cell between labels
        let min_start = if used == 0 { 0 } else { used + 1 };
        if cell < min_start {
            continue;
        }
        row.push_str(&" ".repeat(cell - used));
        row.push_str(label);
        used = cell + label_width;
    }

    row
}

/// Format a slider position or frame number without trailing zeros.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        let text = format!("{:.2}", value);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
