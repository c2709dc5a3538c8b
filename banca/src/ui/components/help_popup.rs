use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use crate::events::FieldKind;
use crate::state::ScreenId;
use crate::ui::{
    layouts, theme,
    view::{Tone, View},
};

pub fn render_help_popup(f: &mut Frame, view: &View) {
    let help_items = get_help_items(view);

    let inner = super::popup::render_popup_frame(
        f,
        layouts::popup_sizes::LARGE,
        "Ayuda",
        "? o Esc para cerrar",
        Tone::Accent,
    );

    let items: Vec<ListItem> = help_items
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));

    f.render_widget(list, inner);
}

pub fn get_help_items(view: &View) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![];

    if view.screen == ScreenId::Logs {
        items.push(("↑/k", "Scroll up (older logs)"));
        items.push(("↓/j", "Scroll down (newer logs)"));
        items.push(("Page Up", "Scroll up one page"));
        items.push(("Page Down", "Scroll down one page"));
        items.push(("g then g", "Scroll to oldest logs"));
        items.push(("G", "Scroll to newest logs"));
    } else if !view.actions.is_empty() {
        items.push(("↑/k", "Move selection up"));
        items.push(("↓/j", "Move selection down"));
        items.push(("Enter/→/l", "Activate selected option"));
    }

    if view.actions.iter().any(|a| a.adjuster.is_some()) {
        items.push(("-/+", "Decrease or increase the selected value"));
    }

    match view.input.map(|field| field.kind()) {
        Some(FieldKind::Amount) => {
            items.push(("0-9 .", "Type the amount"));
            items.push(("Backspace", "Delete last character"));
        }
        Some(FieldKind::Digits) => {
            items.push(("0-9", "Type the number"));
            items.push(("Backspace", "Delete last digit"));
        }
        Some(FieldKind::Text) => {
            items.push(("Type", "Edit the name"));
            items.push(("Backspace", "Delete last character"));
        }
        None => {}
    }

    if view.has_tab_bar() {
        items.push(("Tab/Shift+Tab", "Switch tab"));
    }

    items.push(("", ""));
    items.push(("--- Global ---", ""));
    if view.back.is_some() {
        items.push(("Esc/h/←", "Navigate back"));
    }
    items.push(("g then h", "Go to home"));
    items.push(("g then l", "Go to logs"));
    items.push(("g then g", "Navigate to top of list"));
    items.push(("G", "Navigate to bottom of list"));
    items.push(("?", "Toggle this help"));
    items.push(("q", "Quit application"));
    items.push(("Ctrl+C", "Quit application"));

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::InputField;

    #[test]
    fn test_text_field_help_mentions_typing() {
        let view = View::new(ScreenId::GoalsCreateDetails, "Nueva meta").input(InputField::GoalName);
        let items = get_help_items(&view);
        assert!(items.contains(&("Type", "Edit the name")));
    }

    #[test]
    fn test_logs_help_lists_scrolling() {
        let view = View::new(ScreenId::Logs, "Logs").back(ScreenId::Home);
        let items = get_help_items(&view);
        assert!(items.contains(&("G", "Scroll to newest logs")));
        assert!(items.contains(&("Esc/h/←", "Navigate back")));
    }
}
