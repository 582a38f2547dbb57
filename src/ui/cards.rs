//! Browse screen: header, search bar, controls line, and the card grid.
//!
//! One card per working-set entry, in derivation order. An empty working
//! set renders a single "Not Found" indicator instead of zero cards.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;
use crate::models::{format_population, Country};
use crate::ui::layout::{LayoutContext, CARD_HEIGHT};
use crate::ui::theme::Theme;

/// Placeholder shown when a country has no capital.
pub const NO_CAPITAL: &str = "—";

/// Truncate a string to a display width, adding "..." if needed.
fn truncate(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }

    let limit = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > limit {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str("...");
    out
}

/// Render the browse screen.
pub fn render_browse(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header (title | count)
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Search input
            Constraint::Length(1), // Controls (region | sort | theme)
            Constraint::Length(1), // Spacing
            Constraint::Min(CARD_HEIGHT), // Card grid
            Constraint::Length(1), // Keybind hints
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_search_bar(frame, chunks[2], app);
    render_controls(frame, chunks[3], app);
    render_card_grid(frame, chunks[5], app);
    render_hints(frame, chunks[6], app);
}

/// Render the header: title on the left, record count on the right.
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;

    let title = Span::styled(
        "atlas",
        Style::default()
            .fg(theme.header)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(Paragraph::new(Line::from(title)), area);

    let mut right = format!("{} countries", app.countries.len());
    if let Some(loaded_at) = app.loaded_at {
        right.push_str(&format!(" · fetched {}", loaded_at.format("%H:%M:%S")));
    }
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            right,
            Style::default().fg(theme.dim),
        )))
        .alignment(Alignment::Right),
        area,
    );
}

/// Render the search input: "search: " + query or placeholder.
fn render_search_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;
    let prefix = "search: ";

    let mut spans = vec![Span::styled(prefix, Style::default().fg(theme.dim))];

    if app.search.is_empty() {
        spans.push(Span::styled(
            "type to filter by name",
            Style::default().fg(theme.dim).add_modifier(Modifier::DIM),
        ));
    } else {
        spans.push(Span::styled(
            app.search.content().to_string(),
            Style::default().fg(theme.fg),
        ));
    }
    spans.push(Span::styled("▏", Style::default().fg(theme.accent)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the controls line: region, sort mode, theme.
fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;
    let region = app.current_region().unwrap_or("all");

    let spans = vec![
        Span::styled("region: ", Style::default().fg(theme.dim)),
        Span::styled(region.to_string(), Style::default().fg(theme.fg)),
        Span::styled("  sort: ", Style::default().fg(theme.dim)),
        Span::styled(app.sort.label(), Style::default().fg(theme.fg)),
        Span::styled("  theme: ", Style::default().fg(theme.dim)),
        Span::styled(app.theme.name(), Style::default().fg(theme.fg)),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the card grid, or the "Not Found" state for an empty working set.
fn render_card_grid(frame: &mut Frame, area: Rect, app: &App) {
    if app.working_set.is_empty() {
        render_not_found(frame, area, app.theme);
        return;
    }

    let ctx = LayoutContext::from_area(area);
    let columns = ctx.card_columns();
    let visible_rows = ctx.visible_card_rows(area.height);

    // Scroll by whole rows so the selected card stays visible
    let selected_row = app.selected / columns;
    let row_offset = selected_row.saturating_sub(visible_rows.saturating_sub(1));

    let card_width = area.width / columns as u16;

    for (slot, &index) in app
        .working_set
        .iter()
        .enumerate()
        .skip(row_offset * columns)
        .take(visible_rows * columns)
    {
        let row = slot / columns - row_offset;
        let col = slot % columns;

        let x = area.x + col as u16 * card_width;
        let y = area.y + row as u16 * CARD_HEIGHT;
        if y + CARD_HEIGHT > area.y + area.height {
            break;
        }

        let rect = Rect::new(x, y, card_width, CARD_HEIGHT);
        render_card(
            frame,
            rect,
            app.theme,
            &app.countries[index],
            slot == app.selected,
        );
    }
}

/// Render one country card.
fn render_card(frame: &mut Frame, area: Rect, theme: Theme, country: &Country, selected: bool) {
    let border_style = if selected {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.border)
    };

    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let capital = country.primary_capital().unwrap_or(NO_CAPITAL);

    let lines = vec![
        Line::from(Span::styled(
            truncate(&country.name.common, width),
            Style::default()
                .fg(theme.header)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Population: ", Style::default().fg(theme.dim)),
            Span::styled(format_population(country.population), Style::default().fg(theme.fg)),
        ]),
        Line::from(vec![
            Span::styled("Region: ", Style::default().fg(theme.dim)),
            Span::styled(truncate(&country.region, width.saturating_sub(8)), Style::default().fg(theme.fg)),
        ]),
        Line::from(vec![
            Span::styled("Capital: ", Style::default().fg(theme.dim)),
            Span::styled(truncate(capital, width.saturating_sub(9)), Style::default().fg(theme.fg)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the "Not Found" indicator for an empty working set.
fn render_not_found(frame: &mut Frame, area: Rect, theme: Theme) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Not Found",
            Style::default()
                .fg(theme.fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "no country matches the current search and filter",
            Style::default().fg(theme.dim),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Render the keybind hints footer.
fn render_hints(frame: &mut Frame, area: Rect, app: &App) {
    let hints = "↑↓←→ select · enter details · tab region · ctrl+s sort · ctrl+t theme · esc clear · ctrl+c quit";
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(app.theme.dim),
        ))),
        area,
    );
}
