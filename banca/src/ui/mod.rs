pub mod components;
pub mod layouts;
pub mod registry;
pub mod screens;
pub mod theme;
pub mod utils;
pub mod view;

use crate::log_buffer::LogBuffer;
use crate::state::{AppState, ScreenId};
use ratatui::Frame;
use screens::*;

/// Pure render dispatcher - builds the current view and draws it
/// This function is read-only and never mutates state
pub fn render_app(f: &mut Frame, state: &AppState, log_buffer: &LogBuffer) {
    let view = registry::build(&state.view_context());

    if view.screen == ScreenId::Logs {
        logs_screen::render(f, &state.logs, log_buffer);
    } else {
        view_screen::render(f, &view, state);
    }

    // Render help popup on top if visible
    if state.help_visible {
        components::help_popup::render_help_popup(f, &view);
    }
}
