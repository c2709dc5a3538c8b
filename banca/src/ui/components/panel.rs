use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme;
use crate::ui::view::{Panel, PanelLine};

/// Rows a panel needs, borders included
pub fn panel_height(panel: &Panel) -> u16 {
    u16::try_from(panel.lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

/// Stack panels top to bottom; panels that do not fit are cut off
pub fn render_panels(f: &mut Frame, area: Rect, panels: &[Panel]) {
    let mut constraints: Vec<Constraint> = panels
        .iter()
        .map(|p| Constraint::Length(panel_height(p)))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (panel, chunk) in panels.iter().zip(chunks.iter()) {
        render_panel(f, *chunk, panel);
    }
}

pub fn render_panel(f: &mut Frame, area: Rect, panel: &Panel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(panel.title.as_str(), theme::header_style()));
    let width = usize::from(block.inner(area).width);

    let lines: Vec<Line> = panel.lines.iter().map(|l| panel_line(l, width)).collect();
    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

/// Label on the left, value pushed to the right edge
fn panel_line(line: &PanelLine, width: usize) -> Line<'static> {
    if line.value.is_empty() {
        return Line::from(Span::styled(line.label.clone(), theme::tone_style(line.tone)));
    }

    let used = line.label.chars().count() + line.value.chars().count();
    let gap = width.saturating_sub(used).max(1);
    Line::from(vec![
        Span::raw(line.label.clone()),
        Span::raw(" ".repeat(gap)),
        Span::styled(line.value.clone(), theme::tone_style(line.tone)),
    ])
}
