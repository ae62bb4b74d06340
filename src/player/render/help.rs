//! Help overlay.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::theme::Theme;

/// Key bindings as `(keys, description)`.
pub const HELP_LINES: &[(&str, &str)] = &[
    ("←/→", "drag slider (shift: 5x)"),
    ("enter/space", "release slider, play segment"),
    ("n/p", "next / previous segment"),
    ("home/end", "first / last segment"),
    ("1-9 / 0", "play segment by index / first"),
    ("mouse", "drag slider, release to play"),
    ("o", "open file"),
    ("r", "reload file"),
    ("?", "toggle help"),
    ("q/esc", "quit"),
];

pub const HELP_BOX_WIDTH: u16 = 46;

/// Area of the help box centered in `area`.
pub fn help_area(area: Rect) -> Rect {
    let width = HELP_BOX_WIDTH.min(area.width);
    let height = (HELP_LINES.len() as u16 + 2).min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

pub fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let modal = help_area(area);
    frame.render_widget(Clear, modal);

    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(keys, text)| {
            Line::from(vec![
                Span::styled(format!(" {:<12}", keys), theme.accent_bold_style()),
                Span::styled(*text, theme.text_style()),
            ])
        })
        .collect();

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent_style())
            .title(" Help "),
    );
    frame.render_widget(help, modal);
}
