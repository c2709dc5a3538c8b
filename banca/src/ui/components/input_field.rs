use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::events::InputField;
use crate::ui::theme;

pub fn field_label(field: InputField) -> &'static str {
    match field {
        InputField::TransferAmount => "Monto a transferir",
        InputField::ExchangeAmount => "Monto a cambiar",
        InputField::CardPaymentOther => "Otro monto",
        InputField::QrAmount => "Monto a pagar",
        InputField::GoalTarget => "Monto objetivo",
        InputField::GoalName => "Nombre de la meta",
        InputField::ServiceSupply => "Numero de suministro",
    }
}

/// The field currently receiving typed characters, with a cursor
pub fn render_input_field(f: &mut Frame, area: Rect, field: InputField, text: &str) {
    let line = Line::from(vec![
        Span::styled(text.to_string(), theme::input_focused_style()),
        Span::styled("_", theme::help_text_style()),
    ]);
    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::accent_border_style())
            .title(field_label(field)),
    );

    f.render_widget(paragraph, area);
}
