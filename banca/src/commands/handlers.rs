use crate::events::{AppCommand, FieldKind, InputField, InputKey};
use crate::input::{Key, KeyEvent};
use crate::state::{AppState, ScreenId};
use crate::ui::registry;
use crate::ui::view::View;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Priority 0: Ctrl+C quits from anywhere
    if event.is_interrupt() {
        return Some(AppCommand::Quit);
    }

    // Priority 1: Help popup swallows everything but its own keys
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    let view = registry::build(&state.view_context());

    // Priority 2: Free-text field takes every printable key
    if let Some(field) = view.input.filter(|f| f.kind() == FieldKind::Text) {
        return handle_text_field_keys(key, field, &view, state.selection);
    }

    // Priority 3: Second key of a multi-key sequence
    if let Some(pending) = state.pending_key {
        return match (pending, key) {
            ('g', Key::Char('h')) => Some(AppCommand::Navigate(ScreenId::Home)),
            ('g', Key::Char('l')) => Some(AppCommand::NavigateToLogs),
            ('g', Key::Char('g')) if view.screen == ScreenId::Logs => {
                Some(AppCommand::ScrollLogsToTop)
            }
            ('g', Key::Char('g')) => Some(AppCommand::SelectFirst),
            // Any other key clears the pending key
            _ => Some(AppCommand::ClearPendingKey),
        };
    }

    // Priority 4: Logs screen scrolling
    if view.screen == ScreenId::Logs {
        if let Some(command) = handle_logs_keys(key) {
            return Some(command);
        }
    }

    // Priority 5: Keypad and digit fields
    if let Some(field) = view.input {
        match key {
            Key::Char(c) => {
                if let Some(input) = field.key_for(c) {
                    return Some(AppCommand::Input { field, key: input });
                }
            }
            Key::Backspace => {
                return Some(AppCommand::Input {
                    field,
                    key: InputKey::Delete,
                });
            }
            _ => {}
        }
    }

    let selected = view.selected_action(state.selection);
    let adjuster = selected.and_then(|a| a.adjuster);

    match key {
        Key::Char('?') => Some(AppCommand::ToggleHelp),
        Key::Char('q') => Some(AppCommand::Quit),
        Key::Char('g') => Some(AppCommand::SetPendingKey('g')),
        Key::Char('G') => Some(AppCommand::SelectLast),

        Key::Tab if view.has_tab_bar() => Some(AppCommand::CycleTab { forward: true }),
        Key::BackTab if view.has_tab_bar() => Some(AppCommand::CycleTab { forward: false }),

        Key::Up | Key::Char('k') => Some(AppCommand::SelectPrevious),
        Key::Down | Key::Char('j') => Some(AppCommand::SelectNext),

        // Steppers and sliders
        Key::Left | Key::Char('-') if adjuster.is_some() => {
            adjuster.map(|target| AppCommand::Adjust { target, up: false })
        }
        Key::Right | Key::Char('+') | Key::Char('=') if adjuster.is_some() => {
            adjuster.map(|target| AppCommand::Adjust { target, up: true })
        }

        Key::Enter | Key::Right | Key::Char('l') => activate(&view, state.selection),
        Key::Esc | Key::Left | Key::Char('h') => view.back.map(AppCommand::Navigate),

        _ => None,
    }
}

/// Command of the highlighted action, if it can be activated
fn activate(view: &View, selection: usize) -> Option<AppCommand> {
    view.selected_action(selection)
        .filter(|action| action.enabled)
        .map(|action| action.command.clone())
}

fn handle_text_field_keys(
    key: Key,
    field: InputField,
    view: &View,
    selection: usize,
) -> Option<AppCommand> {
    match key {
        Key::Char(c) => field
            .key_for(c)
            .map(|input| AppCommand::Input { field, key: input }),
        Key::Backspace => Some(AppCommand::Input {
            field,
            key: InputKey::Delete,
        }),
        Key::Up => Some(AppCommand::SelectPrevious),
        Key::Down | Key::Tab => Some(AppCommand::SelectNext),
        Key::Enter => activate(view, selection),
        Key::Esc | Key::Left => view.back.map(AppCommand::Navigate),
        _ => None,
    }
}

fn handle_logs_keys(key: Key) -> Option<AppCommand> {
    match key {
        Key::Up | Key::Char('k') => Some(AppCommand::ScrollLogsUp),
        Key::Down | Key::Char('j') => Some(AppCommand::ScrollLogsDown),
        Key::PageUp => Some(AppCommand::ScrollLogsPageUp),
        Key::PageDown => Some(AppCommand::ScrollLogsPageDown),
        Key::Char('G') => Some(AppCommand::ScrollLogsToBottom),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Adjuster;
    use crate::utils::keypad::KeypadKey;
    use banca_data::Catalog;

    fn state_on(screen: ScreenId) -> AppState {
        let mut state = AppState::new(Catalog::builtin());
        state.navigate(screen);
        state
    }

    fn press(state: &AppState, key: Key) -> Option<AppCommand> {
        handle_key_input(KeyEvent::new(key), state)
    }

    #[test]
    fn test_ctrl_c_quits_even_in_text_field() {
        let state = state_on(ScreenId::GoalsCreateDetails);
        assert_eq!(
            handle_key_input(KeyEvent::with_ctrl(Key::Char('c')), &state),
            Some(AppCommand::Quit)
        );
    }

    #[test]
    fn test_help_popup_swallows_navigation() {
        let mut state = state_on(ScreenId::Home);
        state.help_visible = true;
        assert_eq!(press(&state, Key::Char('j')), None);
        assert_eq!(press(&state, Key::Esc), Some(AppCommand::ToggleHelp));
        assert_eq!(press(&state, Key::Char('q')), Some(AppCommand::Quit));
    }

    #[test]
    fn test_pending_g_sequences() {
        let mut state = state_on(ScreenId::Operations);
        assert_eq!(
            press(&state, Key::Char('g')),
            Some(AppCommand::SetPendingKey('g'))
        );

        state.pending_key = Some('g');
        assert_eq!(
            press(&state, Key::Char('h')),
            Some(AppCommand::Navigate(ScreenId::Home))
        );
        assert_eq!(press(&state, Key::Char('l')), Some(AppCommand::NavigateToLogs));
        assert_eq!(press(&state, Key::Char('g')), Some(AppCommand::SelectFirst));
        assert_eq!(press(&state, Key::Char('x')), Some(AppCommand::ClearPendingKey));
    }

    #[test]
    fn test_logs_keys_scroll() {
        let mut state = state_on(ScreenId::Home);
        state.navigate(ScreenId::Logs);
        assert_eq!(press(&state, Key::Char('k')), Some(AppCommand::ScrollLogsUp));
        assert_eq!(press(&state, Key::PageDown), Some(AppCommand::ScrollLogsPageDown));
        assert_eq!(press(&state, Key::Char('G')), Some(AppCommand::ScrollLogsToBottom));
        assert_eq!(
            press(&state, Key::Esc),
            Some(AppCommand::Navigate(ScreenId::Home))
        );

        state.pending_key = Some('g');
        assert_eq!(press(&state, Key::Char('g')), Some(AppCommand::ScrollLogsToTop));
    }

    #[test]
    fn test_logs_back_returns_to_origin() {
        let mut state = state_on(ScreenId::ExchangeConfirm);
        state.navigate(ScreenId::Logs);
        assert_eq!(
            press(&state, Key::Esc),
            Some(AppCommand::Navigate(ScreenId::ExchangeConfirm))
        );
        assert_eq!(
            press(&state, Key::Char('h')),
            Some(AppCommand::Navigate(ScreenId::ExchangeConfirm))
        );
    }

    #[test]
    fn test_digits_go_to_amount_field() {
        let state = state_on(ScreenId::TransferAmount);
        assert_eq!(
            press(&state, Key::Char('5')),
            Some(AppCommand::Input {
                field: InputField::TransferAmount,
                key: InputKey::Keypad(KeypadKey::Digit(5)),
            })
        );
        assert_eq!(
            press(&state, Key::Backspace),
            Some(AppCommand::Input {
                field: InputField::TransferAmount,
                key: InputKey::Delete,
            })
        );
        // Letters keep their navigation meaning
        assert_eq!(press(&state, Key::Char('q')), Some(AppCommand::Quit));
    }

    #[test]
    fn test_text_field_takes_letters() {
        let state = state_on(ScreenId::GoalsCreateDetails);
        assert_eq!(
            press(&state, Key::Char('q')),
            Some(AppCommand::Input {
                field: InputField::GoalName,
                key: InputKey::Char('q'),
            })
        );
        assert_eq!(
            press(&state, Key::Esc),
            Some(AppCommand::Navigate(ScreenId::GoalsCreateCategory))
        );
    }

    #[test]
    fn test_tab_cycles_only_on_tab_screens() {
        let state = state_on(ScreenId::Home);
        assert_eq!(
            press(&state, Key::Tab),
            Some(AppCommand::CycleTab { forward: true })
        );
        let state = state_on(ScreenId::TransferSelect);
        assert_eq!(press(&state, Key::Tab), None);
    }

    #[test]
    fn test_adjuster_keys_step_values() {
        let state = state_on(ScreenId::GoalDetail);
        let view = registry::build(&state.view_context());
        let mut state = state;
        state.selection = view.find_action("Aporte mensual").unwrap();

        assert_eq!(
            press(&state, Key::Char('-')),
            Some(AppCommand::Adjust {
                target: Adjuster::GoalContribution,
                up: false,
            })
        );
        assert_eq!(
            press(&state, Key::Right),
            Some(AppCommand::Adjust {
                target: Adjuster::GoalContribution,
                up: true,
            })
        );
    }

    #[test]
    fn test_disabled_action_does_nothing() {
        let state = state_on(ScreenId::Exchange);
        let view = registry::build(&state.view_context());
        let mut state = state;
        state.selection = view.find_action("Continuar").unwrap();
        assert_eq!(press(&state, Key::Enter), None);
    }

    #[test]
    fn test_back_uses_view_back() {
        let state = state_on(ScreenId::TransferAmount);
        assert_eq!(
            press(&state, Key::Esc),
            Some(AppCommand::Navigate(ScreenId::TransferSelect))
        );
        let state = state_on(ScreenId::Home);
        assert_eq!(press(&state, Key::Esc), None);
    }
}
