use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::ui::theme;
use crate::ui::view::{Action, Marker, Tone};

pub fn marker_text(marker: Marker) -> &'static str {
    match marker {
        Marker::Radio(true) => "(o) ",
        Marker::Radio(false) => "( ) ",
        Marker::Check(true) => "[x] ",
        Marker::Check(false) => "[ ] ",
        Marker::Switch(true) => "[ON]  ",
        Marker::Switch(false) => "[OFF] ",
    }
}

fn action_item(action: &Action) -> ListItem<'static> {
    let label_style = if action.enabled {
        ratatui::style::Style::default()
    } else {
        theme::disabled_style()
    };

    let mut spans = Vec::new();
    if let Some(marker) = action.marker {
        spans.push(Span::raw(marker_text(marker)));
    }
    spans.push(Span::styled(action.label.clone(), label_style));
    if let Some(detail) = &action.detail {
        let detail = if action.adjuster.is_some() {
            format!("  < {} >", detail)
        } else {
            format!("  {}", detail)
        };
        spans.push(Span::styled(detail, theme::tone_style(Tone::Muted)));
    }
    ListItem::new(Line::from(spans))
}

/// Selectable actions of a view with the highlight on `selection`
pub fn render_actions(f: &mut Frame, area: Rect, actions: &[Action], selection: usize) {
    let items: Vec<ListItem> = actions.iter().map(action_item).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Opciones"))
        .highlight_style(theme::selection_style())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !actions.is_empty() {
        list_state.select(Some(selection.min(actions.len() - 1)));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}
