//! Shared help bar component for consistent bottom navigation hints.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;
use crate::ui::view::View;

/// Render a standard help bar with the given text.
pub fn render_help_bar(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(theme::help_text_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, area);
}

/// Standard help bar text used when a view has nothing special
pub const HELP_TEXT_DEFAULT: &str = "Press ? for help";

/// Key hints for what the given view accepts
pub fn help_text(view: &View) -> String {
    let mut parts = Vec::new();
    if !view.actions.is_empty() {
        parts.push("j/k: move");
        parts.push("Enter: select");
    }
    if view.input.is_some() {
        parts.push("type: edit");
    }
    if view.actions.iter().any(|a| a.adjuster.is_some()) {
        parts.push("-/+: adjust");
    }
    if view.has_tab_bar() {
        parts.push("Tab: switch tab");
    }
    if view.back.is_some() {
        parts.push("Esc: back");
    }
    if parts.is_empty() {
        return HELP_TEXT_DEFAULT.to_string();
    }
    parts.push("?: help");
    parts.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::InputField;
    use crate::state::ScreenId;
    use crate::ui::view::Action;

    #[test]
    fn test_empty_view_uses_default_text() {
        let view = View::new(ScreenId::QrSuccess, "Listo");
        assert_eq!(help_text(&view), HELP_TEXT_DEFAULT);
    }

    #[test]
    fn test_hints_follow_view_shape() {
        let view = View::new(ScreenId::TransferAmount, "Monto")
            .back(ScreenId::TransferSelect)
            .input(InputField::TransferAmount)
            .action(Action::go("Continuar", ScreenId::TransferConfirm));
        let text = help_text(&view);
        assert!(text.contains("type: edit"));
        assert!(text.contains("Esc: back"));
        assert!(!text.contains("Tab"));
    }
}
