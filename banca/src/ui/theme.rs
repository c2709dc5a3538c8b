//! Centralized theme constants and style functions for consistent UI styling.
//!
//! Colors, layout constants and common styles live here so every screen
//! draws panels, actions and popups the same way.

use ratatui::style::{Color, Modifier, Style};

use super::view::Tone;

// =============================================================================
// Colors
// =============================================================================

/// Color for credits and completed states
pub const COLOR_POSITIVE: Color = Color::Green;

/// Color for debts and overdue bills
pub const COLOR_NEGATIVE: Color = Color::Red;

/// Color for secondary figures
pub const COLOR_MUTED: Color = Color::DarkGray;

/// Background color for the highlighted action
pub const COLOR_SELECTION_BG: Color = Color::DarkGray;

/// Color for panel titles and table headers
pub const COLOR_HEADER: Color = Color::Yellow;

/// Color for help text
pub const COLOR_HELP_TEXT: Color = Color::Gray;

/// Color for screen titles and the active tab
pub const COLOR_TITLE: Color = Color::Cyan;

/// Color for warnings and the scanner
pub const COLOR_WARNING: Color = Color::Yellow;

/// Border color for accent elements
pub const COLOR_BORDER_ACCENT: Color = Color::Cyan;

/// Color for the input field being typed into
pub const COLOR_INPUT_FOCUSED: Color = Color::Yellow;

// =============================================================================
// Layout Constants
// =============================================================================

/// Standard margin around screen content
pub const SCREEN_MARGIN: u16 = 2;

/// Height of the title/header area
pub const TITLE_HEIGHT: u16 = 1;

/// Height of the tab bar on tab screens
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Height of the input field when a view has one
pub const INPUT_HEIGHT: u16 = 3;

/// Height of the help bar at the bottom
pub const HELP_BAR_HEIGHT: u16 = 3;

/// Width of the action column, in percent of the content area
pub const ACTIONS_WIDTH_PERCENT: u16 = 45;

// =============================================================================
// Style Functions
// =============================================================================

/// Style for the highlighted action
pub fn selection_style() -> Style {
    Style::default()
        .bg(COLOR_SELECTION_BG)
        .add_modifier(Modifier::BOLD)
}

/// Style for panel titles and table headers
pub fn header_style() -> Style {
    Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD)
}

pub fn help_text_style() -> Style {
    Style::default().fg(COLOR_HELP_TEXT)
}

pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

/// Style for actions that cannot be activated yet
pub fn disabled_style() -> Style {
    Style::default()
        .fg(COLOR_MUTED)
        .add_modifier(Modifier::CROSSED_OUT)
}

pub fn input_focused_style() -> Style {
    Style::default()
        .fg(COLOR_INPUT_FOCUSED)
        .add_modifier(Modifier::BOLD)
}

pub fn accent_border_style() -> Style {
    Style::default().fg(COLOR_BORDER_ACCENT)
}

/// Style of a panel value with the given tone
pub fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Normal => Style::default(),
        Tone::Positive => Style::default().fg(COLOR_POSITIVE),
        Tone::Negative => Style::default().fg(COLOR_NEGATIVE),
        Tone::Muted => Style::default().fg(COLOR_MUTED),
        Tone::Accent => Style::default()
            .fg(COLOR_TITLE)
            .add_modifier(Modifier::BOLD),
        Tone::Warning => Style::default().fg(COLOR_WARNING),
    }
}
