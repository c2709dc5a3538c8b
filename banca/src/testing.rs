use banca_data::Catalog;
use ratatui::{backend::TestBackend, Terminal};

use crate::app_core::AppCore;
use crate::input::{Key, KeyEvent};
use crate::log_buffer::LogBuffer;
use crate::state::{AppState, ScreenId};
use crate::ui::{self, registry, view::View};

/// Drives the app with key events, without a terminal
pub struct TestApp {
    core: AppCore,
    log_buffer: LogBuffer,
}

impl TestApp {
    /// A test app on the login screen with the built-in catalog
    pub fn new() -> Self {
        Self::starting_at(ScreenId::Login)
    }

    pub fn starting_at(screen: ScreenId) -> Self {
        Self::with_catalog(Catalog::builtin(), screen)
    }

    pub fn with_catalog(catalog: Catalog, screen: ScreenId) -> Self {
        Self {
            core: AppCore::new(catalog, screen),
            log_buffer: LogBuffer::new(100),
        }
    }

    /// Send a single key event
    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    /// Send multiple keys in sequence
    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type each character as a key press
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Move the highlight with Down until an action containing `label`
    /// is selected. Panics if the current view has no such action.
    pub fn select(&mut self, label: &str) {
        let view = self.view();
        let Some(index) = view.find_action(label) else {
            panic!(
                "No action {:?} on {}; actions: {:?}",
                label,
                view.screen,
                view.actions.iter().map(|a| &a.label).collect::<Vec<_>>()
            );
        };
        for _ in 0..view.actions.len() {
            if self.state().selection == index {
                return;
            }
            self.send_key(Key::Down);
        }
        assert_eq!(self.state().selection, index, "could not reach {:?}", label);
    }

    /// Select the action containing `label` and press Enter
    pub fn activate(&mut self, label: &str) {
        self.select(label);
        self.send_key(Key::Enter);
    }

    /// Get read-only access to current state
    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    pub fn screen(&self) -> ScreenId {
        self.state().current_screen()
    }

    /// The view currently on screen
    pub fn view(&self) -> View {
        registry::build(&self.state().view_context())
    }

    pub fn tick(&mut self) {
        self.core.tick();
    }

    /// Draw the app into an in-memory terminal and return its text
    pub fn render(&self, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = match Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(e) => panic!("test terminal: {}", e),
        };
        if let Err(e) = terminal.draw(|f| ui::render_app(f, self.state(), &self.log_buffer)) {
            panic!("draw failed: {}", e);
        }

        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    /// Assert that the app is on a specific screen
    pub fn assert_screen(&self, expected: ScreenId) {
        assert_eq!(
            self.screen(),
            expected,
            "Expected screen {}, got {}",
            expected,
            self.screen()
        );
    }

    /// Assert that the app should quit
    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    /// Assert that the app should NOT quit
    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
