use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::state::ScreenId;
use crate::ui::theme;

pub fn tab_label(screen: ScreenId) -> &'static str {
    match screen {
        ScreenId::Home => "Inicio",
        ScreenId::Operations => "Operaciones",
        ScreenId::ForYou => "Para ti",
        _ => "",
    }
}

/// Bottom-navigation tabs, drawn as a strip above tab screens
pub fn render_tab_bar(f: &mut Frame, area: Rect, current: ScreenId) {
    let selected = ScreenId::TABS.iter().position(|s| *s == current);
    let tabs = Tabs::new(ScreenId::TABS.iter().map(|s| tab_label(*s)))
        .block(Block::default().borders(Borders::ALL))
        .style(theme::help_text_style())
        .highlight_style(theme::title_style())
        .select(selected);

    f.render_widget(tabs, area);
}
