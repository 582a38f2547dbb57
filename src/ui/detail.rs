//! Detail screen for a single country, keyed by its common name.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::format_population;
use crate::ui::cards::NO_CAPITAL;

/// Render the detail screen for the current detail key.
pub fn render_detail(frame: &mut Frame, app: &App) {
    let theme = app.theme;
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(1)])
        .split(area);

    render_hints(frame, chunks[1], app);

    let Some(country) = app.detail_country() else {
        // Detail key no longer resolves; fall back to an explicit indicator
        frame.render_widget(
            Paragraph::new(Span::styled("Not Found", Style::default().fg(theme.fg))),
            chunks[0],
        );
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            format!(" {} ", country.name.common),
            Style::default()
                .fg(theme.header)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    let label = Style::default().fg(theme.dim);
    let value = Style::default().fg(theme.fg);

    let capitals = if country.capital.is_empty() {
        NO_CAPITAL.to_string()
    } else {
        country.capital.join(", ")
    };
    let subregion = if country.subregion.is_empty() {
        NO_CAPITAL.to_string()
    } else {
        country.subregion.clone()
    };

    let mut lines = vec![
        Line::from(Span::styled(
            if country.name.official.is_empty() {
                country.name.common.clone()
            } else {
                country.name.official.clone()
            },
            Style::default().fg(theme.accent),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Population: ", label),
            Span::styled(format_population(country.population), value),
        ]),
        Line::from(vec![
            Span::styled("Region: ", label),
            Span::styled(country.region.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("Subregion: ", label),
            Span::styled(subregion, value),
        ]),
        Line::from(vec![
            Span::styled("Capital: ", label),
            Span::styled(capitals, value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Flag: ", label),
            Span::styled(country.flags.svg.clone(), value),
        ]),
    ];

    if let Some(alt) = &country.flags.alt {
        lines.push(Line::from(Span::styled(alt.clone(), label)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("API: ", label),
        Span::styled(app.client.country_url(&country.name.common), label),
    ]));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// Render the keybind hints footer.
fn render_hints(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "esc back · o open flag in browser · ctrl+t theme · ctrl+c quit",
            Style::default().fg(app.theme.dim),
        ))),
        area,
    );
}
