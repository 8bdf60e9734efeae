//! TUI theme and styles

use ratatui::style::{Color, Modifier, Style};

/// Application color theme
pub struct Theme;

impl Theme {
    /// Primary accent color
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color
    pub const SECONDARY: Color = Color::Yellow;

    /// Success color
    pub const SUCCESS: Color = Color::Green;

    /// Error color
    pub const ERROR: Color = Color::Red;

    /// Muted text color
    pub const MUTED: Color = Color::DarkGray;

    /// Header style
    pub fn header() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    /// Status bar style
    pub fn status_bar() -> Style {
        Style::default().bg(Color::DarkGray)
    }

    /// Submit control style, dimmed while disabled
    pub fn button(enabled: bool) -> Style {
        if enabled {
            Style::default()
                .bg(Self::PRIMARY)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(Self::MUTED).fg(Color::Gray)
        }
    }

    /// Spinner style
    pub fn spinner() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    /// Border of the results region
    pub fn result_border(is_error: bool) -> Style {
        if is_error {
            Style::default().fg(Self::ERROR)
        } else {
            Style::default().fg(Self::SUCCESS)
        }
    }

    /// Inline error text
    pub fn error() -> Style {
        Style::default().fg(Self::ERROR)
    }

    /// Normal text style
    pub fn normal() -> Style {
        Style::default()
    }

    /// Muted text style
    pub fn muted() -> Style {
        Style::default().fg(Self::MUTED)
    }
}
