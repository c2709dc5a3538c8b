//! Centered overlay drawn above the current screen.

use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::{layouts, theme, view::Tone};

/// Clear a centered box of `size` (percent of the frame) and draw its border.
///
/// `closing_hint` goes on the bottom border. Returns the area inside the
/// border for the caller's content.
pub fn render_popup_frame(
    f: &mut Frame,
    size: (u16, u16),
    title: &str,
    closing_hint: &str,
    tone: Tone,
) -> Rect {
    let (width, height) = size;
    let area = layouts::centered_popup(width, height, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::tone_style(tone))
        .title(Line::from(format!(" {} ", title)).alignment(Alignment::Center))
        .title_bottom(Line::from(format!(" {} ", closing_hint)).alignment(Alignment::Right));

    let inner = block.inner(area);
    f.render_widget(block, area);
    inner
}
