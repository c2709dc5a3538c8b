use banca_data::Catalog;

use crate::commands::{executor, handlers};
use crate::events::AppCommand;
use crate::input::KeyEvent;
use crate::state::{AppState, ScreenId};

/// Testable application core without terminal dependencies
///
/// Owns the whole app state. The terminal loop and the test harness both
/// drive it through the same key entry point.
pub struct AppCore {
    ui_state: AppState,
}

impl AppCore {
    /// Create a core showing `start` over the given catalog
    pub fn new(catalog: Catalog, start: ScreenId) -> Self {
        let mut ui_state = AppState::new(catalog);
        if start != ui_state.current_screen() {
            ui_state.navigate(start);
        }
        Self { ui_state }
    }

    /// Handle keyboard input and execute the resulting command
    pub fn handle_key(&mut self, event: KeyEvent) {
        // Don't log on the logs screen to avoid a feedback loop
        let on_logs_screen = self.ui_state.current_screen() == ScreenId::Logs;
        if !on_logs_screen {
            tracing::debug!("Key press: {:?}", event);
        }

        if let Some(command) = handlers::handle_key_input(event, &self.ui_state) {
            if !on_logs_screen {
                tracing::info!("Executing command: {:?}", command);
            }
            self.execute(command);
        }
    }

    pub fn execute(&mut self, command: AppCommand) {
        executor::execute_command(command, &mut self.ui_state);
    }

    /// Advance animations; called on every tick of the event loop
    pub fn tick(&mut self) {
        if self.ui_state.current_screen() == ScreenId::QrScan {
            self.ui_state.scanner.calc_next();
        }
    }

    /// Keep the logs screen's entry count in sync with the buffer
    pub fn set_log_total(&mut self, total: usize) {
        self.ui_state.logs.total_entries = total;
    }

    /// Get read-only access to the current UI state (for rendering or assertions)
    pub fn state(&self) -> &AppState {
        &self.ui_state
    }

    pub fn should_quit(&self) -> bool {
        self.ui_state.should_quit
    }
}
