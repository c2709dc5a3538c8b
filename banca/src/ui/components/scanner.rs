use ratatui::{layout::Rect, Frame};
use throbber_widgets_tui::{Throbber, ThrobberState, BRAILLE_EIGHT};

/// Animated indicator shown while the QR camera is "scanning"
pub fn render_scanner(f: &mut Frame, area: Rect, state: &ThrobberState) {
    let throbber = Throbber::default().throbber_set(BRAILLE_EIGHT);
    f.render_stateful_widget(throbber, area, &mut state.clone());
}
