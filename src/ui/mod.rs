//! UI rendering for atlas.
//!
//! `render` is a pure function of the application state with the side
//! effect of drawing one frame: the welcome gate, the loading indicator,
//! the failed-load message, or the browse/detail screens. Rendering twice
//! from the same state draws the same frame.

mod cards;
mod detail;
mod layout;
mod theme;
mod welcome;

pub use layout::{LayoutContext, CARD_HEIGHT, MAX_COLUMNS, MIN_CARD_WIDTH};
pub use theme::{Theme, ThemeMode};

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::{App, LoadPhase, Screen};
use crate::error::LoadError;

/// Loading spinner frames, advanced by the animation tick.
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the current frame.
pub fn render(frame: &mut Frame, app: &App) {
    // Background fill so the light palette covers the whole screen
    frame.render_widget(
        Block::default().style(Style::default().bg(app.theme.bg).fg(app.theme.fg)),
        frame.area(),
    );

    match &app.phase {
        LoadPhase::Welcome => welcome::render_welcome(frame, app),
        LoadPhase::Loading => render_loading(frame, app),
        LoadPhase::Failed(err) => render_load_error(frame, app, err),
        LoadPhase::Loaded => match app.screen {
            Screen::Browse => cards::render_browse(frame, app),
            Screen::Detail => detail::render_detail(frame, app),
        },
    }
}

/// Render the loading indicator while the fetch task is in flight.
fn render_loading(frame: &mut Frame, app: &App) {
    let spinner = SPINNER_FRAMES[(app.tick_count as usize) % SPINNER_FRAMES.len()];
    let line = Line::from(vec![
        Span::styled(spinner, Style::default().fg(app.theme.accent)),
        Span::styled(" Loading countries...", Style::default().fg(app.theme.fg)),
    ]);

    frame.render_widget(
        Paragraph::new(vec![Line::from(""), line]).alignment(Alignment::Center),
        frame.area(),
    );
}

/// Render the failed-load state: one user-facing message, never a blank
/// screen.
fn render_load_error(frame: &mut Frame, app: &App, err: &LoadError) {
    let theme = app.theme;
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Error: {}", err.user_message()),
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "details were written to the log file",
            Style::default().fg(theme.dim),
        )),
        Line::from(Span::styled(
            "ctrl+c quit",
            Style::default().fg(theme.dim),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        frame.area(),
    );
}
