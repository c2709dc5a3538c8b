//! Pure, framework-free description of a screen.
//!
//! Screen builders turn a [`ViewContext`] into a [`View`]; the renderer and
//! the key handler both read the same `View`, so what is drawn is exactly
//! what the keys act on.

use banca_data::Catalog;

use crate::events::{Adjuster, AppCommand, InputField};
use crate::state::{drafts::Drafts, LogsState, NavigationState, ScreenId};

/// Read-only state a screen builder may look at
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    pub nav: &'a NavigationState,
    pub drafts: &'a Drafts,
    pub selection: usize,
    pub logs: &'a LogsState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Normal,
    Positive,
    Negative,
    Muted,
    Accent,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelLine {
    pub label: String,
    pub value: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Panel {
    pub title: String,
    pub lines: Vec<PanelLine>,
}

impl Panel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// A label with a right-aligned value
    pub fn row(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.lines.push(PanelLine {
            label: label.into(),
            value: value.into(),
            tone: Tone::Normal,
        });
        self
    }

    pub fn toned(
        mut self,
        label: impl Into<String>,
        value: impl Into<String>,
        tone: Tone,
    ) -> Self {
        self.lines.push(PanelLine {
            label: label.into(),
            value: value.into(),
            tone,
        });
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.toned(text, "", Tone::Normal)
    }

    pub fn note(self, text: impl Into<String>) -> Self {
        self.toned(text, "", Tone::Muted)
    }
}

/// Selection marker drawn before an action label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Radio(bool),
    Check(bool),
    Switch(bool),
}

/// A selectable row bound to a command
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub label: String,
    pub detail: Option<String>,
    pub command: AppCommand,
    pub enabled: bool,
    pub marker: Option<Marker>,
    pub adjuster: Option<Adjuster>,
}

impl Action {
    pub fn new(label: impl Into<String>, command: AppCommand) -> Self {
        Self {
            label: label.into(),
            detail: None,
            command,
            enabled: true,
            marker: None,
            adjuster: None,
        }
    }

    /// Shortcut for an action that only transitions
    pub fn go(label: impl Into<String>, target: ScreenId) -> Self {
        Self::new(label, AppCommand::Navigate(target))
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    /// A slider or stepper row: Enter and `+` step up, `-` steps down
    pub fn adjuster(label: impl Into<String>, target: Adjuster) -> Self {
        let mut action = Self::new(label, AppCommand::Adjust { target, up: true });
        action.adjuster = Some(target);
        action
    }
}

/// Everything needed to draw a screen and interpret keys on it
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub screen: ScreenId,
    pub title: String,
    pub back: Option<ScreenId>,
    pub panels: Vec<Panel>,
    pub actions: Vec<Action>,
    /// Field receiving typed characters, if any
    pub input: Option<InputField>,
    /// Show the animated scanner next to the title
    pub busy: bool,
}

impl View {
    pub fn new(screen: ScreenId, title: impl Into<String>) -> Self {
        Self {
            screen,
            title: title.into(),
            back: None,
            panels: Vec::new(),
            actions: Vec::new(),
            input: None,
            busy: false,
        }
    }

    pub fn back(mut self, target: ScreenId) -> Self {
        self.back = Some(target);
        self
    }

    pub fn panel(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.actions.extend(actions);
        self
    }

    pub fn input(mut self, field: InputField) -> Self {
        self.input = Some(field);
        self
    }

    pub fn busy(mut self) -> Self {
        self.busy = true;
        self
    }

    pub fn has_tab_bar(&self) -> bool {
        self.screen.is_tab()
    }

    pub fn selected_action(&self, selection: usize) -> Option<&Action> {
        self.actions.get(selection)
    }

    pub fn find_action(&self, label: &str) -> Option<usize> {
        self.actions.iter().position(|a| a.label.contains(label))
    }
}
