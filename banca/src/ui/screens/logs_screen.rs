use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Row, Table},
};
use tracing::Level;

use crate::log_buffer::{LogBuffer, LogEntry};
use crate::state::{LogsState, ScreenId};
use crate::ui::{
    components::{empty_state, help_bar},
    layouts, theme,
    view::{Tone, View, ViewContext},
};

const TARGET_WIDTH: usize = 25;

/// Border, header and its margin
const TABLE_CHROME_ROWS: u16 = 3;

/// The logs screen has no actions; scrolling keys are handled directly
pub fn view(ctx: &ViewContext) -> View {
    View::new(ScreenId::Logs, format!("Logs ({} entries)", ctx.logs.total_entries))
        .back(ctx.logs.return_to)
}

pub fn render(f: &mut Frame, state: &LogsState, log_buffer: &LogBuffer) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    let title = Paragraph::new(format!("Logs ({} entries)", state.total_entries))
        .style(theme::title_style());
    f.render_widget(title, title_area);

    let entries = log_buffer.get_entries();
    if entries.is_empty() {
        empty_state::render_empty_state(f, content_area, "Session", "No logs yet", Tone::Warning);
    } else {
        let page = visible_range(entries.len(), state.scroll_offset, content_area.height);
        render_table(f, content_area, &entries, page);
    }

    help_bar::render_help_bar(f, help_area, &help_text(state.scroll_offset));
}

/// Entries shown for a scroll offset counted up from the newest entry
fn visible_range(total: usize, scroll_offset: usize, height: u16) -> std::ops::Range<usize> {
    let rows = usize::from(height.saturating_sub(TABLE_CHROME_ROWS));
    let end = total - scroll_offset.min(total.saturating_sub(1));
    end.saturating_sub(rows)..end
}

fn render_table(f: &mut Frame, area: Rect, entries: &[LogEntry], page: std::ops::Range<usize>) {
    let caption = format!(" {}-{} of {} ", page.start + 1, page.end, entries.len());
    let rows: Vec<Row> = entries[page].iter().map(log_row).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(5),
            Constraint::Length(TARGET_WIDTH as u16),
            Constraint::Min(30),
        ],
    )
    .header(
        Row::new(["Time", "Level", "Target", "Message"])
            .style(theme::header_style())
            .bottom_margin(1),
    )
    .block(Block::default().borders(Borders::ALL).title(caption));

    f.render_widget(table, area);
}

fn log_row(entry: &LogEntry) -> Row<'_> {
    let (label, style) = level_look(entry.level);
    Row::new(vec![
        entry.timestamp.format("%H:%M:%S%.3f").to_string(),
        label.to_string(),
        truncate_target(&entry.target, TARGET_WIDTH),
        entry.message.clone(),
    ])
    .style(style)
}

fn level_look(level: Level) -> (&'static str, Style) {
    match level {
        Level::ERROR => ("ERROR", theme::tone_style(Tone::Negative).add_modifier(Modifier::BOLD)),
        Level::WARN => ("WARN", theme::tone_style(Tone::Warning)),
        Level::INFO => ("INFO", theme::tone_style(Tone::Positive)),
        Level::DEBUG => ("DEBUG", Style::default().fg(Color::Blue)),
        Level::TRACE => ("TRACE", theme::tone_style(Tone::Muted)),
    }
}

fn help_text(scroll_offset: usize) -> String {
    let mut text =
        String::from("j/k: scroll | PgUp/PgDn: page | gg/G: top/bottom | Esc: back | ?: help");
    if scroll_offset > 0 {
        text.push_str(&format!(" | {} above newest", scroll_offset));
    }
    text
}

/// Keep the tail of a module path, e.g. `...:executor`
fn truncate_target(target: &str, max_len: usize) -> String {
    let len = target.chars().count();
    if len <= max_len {
        return target.to_string();
    }
    let tail: String = target.chars().skip(len - max_len + 3).collect();
    format!("...{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_target_keeps_tail() {
        assert_eq!(truncate_target("banca::app", 25), "banca::app");
        assert_eq!(
            truncate_target("banca::commands::executor", 12),
            "...:executor"
        );
    }

    #[test]
    fn test_visible_range_follows_offset() {
        // 13 rows of content leave 10 for entries
        assert_eq!(visible_range(30, 0, 13), 20..30);
        assert_eq!(visible_range(30, 5, 13), 15..25);
        assert_eq!(visible_range(30, 99, 13), 0..1);
        assert_eq!(visible_range(4, 0, 13), 0..4);
    }
}
