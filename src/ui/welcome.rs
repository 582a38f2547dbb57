//! Welcome gate screen.
//!
//! Shown once at startup; confirming it triggers the one-shot dataset
//! fetch. Replaces the original repeating confirmation prompt.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Render the welcome gate.
pub fn render_welcome(frame: &mut Frame, app: &App) {
    let theme = app.theme;
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(5),
            Constraint::Percentage(40),
        ])
        .split(area);

    let lines = vec![
        Line::from(Span::styled(
            "atlas",
            Style::default()
                .fg(theme.header)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "a terminal browser for world country data",
            Style::default().fg(theme.dim),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to fetch the country dataset",
            Style::default().fg(theme.fg),
        )),
        Line::from(Span::styled(
            "ctrl+c quit",
            Style::default().fg(theme.dim),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        chunks[1],
    );
}
