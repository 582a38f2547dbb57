//! Responsive layout calculations for the card grid.

use ratatui::layout::Rect;

/// Minimum width of a single card column, borders included.
pub const MIN_CARD_WIDTH: u16 = 28;

/// Height of one card row: border + four content lines + border.
pub const CARD_HEIGHT: u16 = 6;

/// Maximum columns regardless of terminal width.
pub const MAX_COLUMNS: usize = 4;

/// Encapsulates terminal dimensions for proportional sizing decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    /// Create a layout context for the given terminal dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Create a layout context from an area rect.
    pub fn from_area(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Number of card columns that fit the current width.
    pub fn card_columns(&self) -> usize {
        ((self.width / MIN_CARD_WIDTH) as usize).clamp(1, MAX_COLUMNS)
    }

    /// Card grid rows visible in `content_height` terminal rows.
    pub fn visible_card_rows(&self, content_height: u16) -> usize {
        (content_height / CARD_HEIGHT).max(1) as usize
    }

    /// True when the terminal is too narrow for comfortable two-column
    /// layouts.
    pub fn is_compact(&self) -> bool {
        self.width < 2 * MIN_CARD_WIDTH
    }
}
