use ratatui::{prelude::*, widgets::Paragraph};

use crate::state::AppState;
use crate::ui::{
    components::{action_list, empty_state, help_bar, input_field, panel, scanner, tab_bar},
    layouts, theme,
    view::{Tone, View},
};

/// Draw any registry-built view: title, tabs, input, panels and actions
pub fn render(f: &mut Frame, view: &View, state: &AppState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    render_title(f, title_area, view, state);

    let mut content_area = content_area;
    if view.has_tab_bar() {
        let (tabs_area, rest) = layouts::tab_bar_split(content_area);
        tab_bar::render_tab_bar(f, tabs_area, view.screen);
        content_area = rest;
    }
    if let Some(field) = view.input {
        let (input_area, rest) = layouts::input_split(content_area);
        input_field::render_input_field(f, input_area, field, state.field_text(field));
        content_area = rest;
    }

    render_content(f, content_area, view, state.selection);
    help_bar::render_help_bar(f, help_area, &help_bar::help_text(view));
}

fn render_title(f: &mut Frame, area: Rect, view: &View, state: &AppState) {
    let (text_area, indicator_area) = layouts::title_with_indicator(area);
    let title = Paragraph::new(view.title.as_str()).style(theme::title_style());
    f.render_widget(title, text_area);

    if view.busy {
        scanner::render_scanner(f, indicator_area, &state.scanner);
    }
}

fn render_content(f: &mut Frame, area: Rect, view: &View, selection: usize) {
    match (view.panels.is_empty(), view.actions.is_empty()) {
        (true, true) => {
            empty_state::render_empty_state(f, area, &view.title, "Nada que mostrar", Tone::Muted)
        }
        (false, true) => panel::render_panels(f, area, &view.panels),
        (true, false) => action_list::render_actions(f, area, &view.actions, selection),
        (false, false) => {
            let (panels_area, actions_area) = layouts::panels_and_actions(area);
            panel::render_panels(f, panels_area, &view.panels);
            action_list::render_actions(f, actions_area, &view.actions, selection);
        }
    }
}
