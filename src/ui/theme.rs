//! Color themes for the atlas UI.
//!
//! Two palettes, switchable at runtime. The dark palette is the default;
//! the light palette mirrors it with the roles inverted.

use ratatui::style::Color;

/// Which palette is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// Resolved color roles for the active palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    /// Screen background
    pub bg: Color,
    /// Default text
    pub fg: Color,
    /// Card and panel borders
    pub border: Color,
    /// Highlights and the selected card border
    pub accent: Color,
    /// Header / title text
    pub header: Color,
    /// De-emphasized text (hints, labels)
    pub dim: Color,
    /// Error message text
    pub error: Color,
}

impl Theme {
    /// The default dark palette.
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            bg: Color::Reset,
            fg: Color::White,
            border: Color::DarkGray,
            accent: Color::LightCyan,
            header: Color::White,
            dim: Color::DarkGray,
            error: Color::Red,
        }
    }

    /// The light palette.
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            bg: Color::White,
            fg: Color::Black,
            border: Color::Gray,
            accent: Color::Blue,
            header: Color::Black,
            dim: Color::Gray,
            error: Color::Red,
        }
    }

    /// The other palette.
    pub fn toggled(self) -> Self {
        match self.mode {
            ThemeMode::Dark => Self::light(),
            ThemeMode::Light => Self::dark(),
        }
    }

    /// Short name for the controls line.
    pub fn name(&self) -> &'static str {
        match self.mode {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
