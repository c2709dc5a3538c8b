use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::{theme, view::Tone};

/// Boxed, centered message for an area with nothing to list
pub fn render_empty_state(f: &mut Frame, area: Rect, title: &str, message: &str, tone: Tone) {
    // Start a third of the way down so the message sits near the middle
    let top_padding = area.height.saturating_sub(2) / 3;
    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::default()).collect();
    lines.push(Line::styled(message, theme::tone_style(tone)));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::help_text_style())
                .title(format!(" {} ", title)),
        );
    f.render_widget(paragraph, area);
}
