//! Reusable layout builders for consistent screen structure.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{
    ACTIONS_WIDTH_PERCENT, HELP_BAR_HEIGHT, INPUT_HEIGHT, SCREEN_MARGIN, TAB_BAR_HEIGHT,
    TITLE_HEIGHT,
};

/// Standard screen layout with title, content area, and help bar.
///
/// Returns a tuple of (title_area, content_area, help_area)
pub fn screen_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(10),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Take a strip of `height` rows off the top of `area`.
///
/// Returns (strip_area, rest_area)
pub fn split_top(area: Rect, height: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(height), Constraint::Min(0)])
        .split(area);

    (chunks[0], chunks[1])
}

pub fn tab_bar_split(area: Rect) -> (Rect, Rect) {
    split_top(area, TAB_BAR_HEIGHT)
}

pub fn input_split(area: Rect) -> (Rect, Rect) {
    split_top(area, INPUT_HEIGHT)
}

/// Split the content area into the panel column and the action column.
///
/// Returns (panels_area, actions_area)
pub fn panels_and_actions(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(100 - ACTIONS_WIDTH_PERCENT),
            Constraint::Percentage(ACTIONS_WIDTH_PERCENT),
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Split a title area into title text and the scanner indicator.
///
/// Returns (title_text_area, indicator_area)
pub fn title_with_indicator(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    (chunks[0], chunks[1])
}

/// Create a centered popup rectangle.
///
/// # Arguments
/// * `percent_x` - Width as percentage of parent (0-100)
/// * `percent_y` - Height as percentage of parent (0-100)
/// * `area` - The parent area to center within
pub fn centered_popup(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Standard popup sizes
pub mod popup_sizes {
    /// Large popup (80% x 80%) - for the help screen
    pub const LARGE: (u16, u16) = (80, 80);
}
