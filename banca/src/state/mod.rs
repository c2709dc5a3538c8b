pub mod drafts;
pub mod navigation;

use banca_data::Catalog;
use throbber_widgets_tui::ThrobberState;

pub use drafts::Drafts;
pub use navigation::{Flow, FlowParams, NavigationState, ScreenId};

use crate::events::InputField;
use crate::ui::view::ViewContext;

/// Scroll position of the logs screen, and where to return from it
#[derive(Debug, Clone, PartialEq)]
pub struct LogsState {
    pub scroll_offset: usize,
    pub total_entries: usize,
    pub return_to: ScreenId,
}

impl Default for LogsState {
    fn default() -> Self {
        Self {
            scroll_offset: 0,
            total_entries: 0,
            return_to: ScreenId::Home,
        }
    }
}

/// Everything the app knows, exclusively owned by the event loop
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub nav: NavigationState,
    pub drafts: Drafts,
    /// Index of the highlighted action of the current view
    pub selection: usize,
    pub help_visible: bool,
    pub pending_key: Option<char>,
    pub should_quit: bool,
    pub scanner: ThrobberState,
    pub logs: LogsState,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        let nav = NavigationState::new(catalog.default_account());
        let drafts = Drafts::new(&catalog);
        Self {
            catalog,
            nav,
            drafts,
            selection: 0,
            help_visible: false,
            pending_key: None,
            should_quit: false,
            scanner: ThrobberState::default(),
            logs: LogsState::default(),
        }
    }

    pub fn current_screen(&self) -> ScreenId {
        self.nav.current
    }

    /// Transition to `target`, resetting the drafts of a flow being entered
    pub fn navigate(&mut self, target: ScreenId) {
        let from = self.nav.current;
        if target == ScreenId::Logs && from != ScreenId::Logs {
            self.logs = LogsState {
                return_to: from,
                ..LogsState::default()
            };
        }

        self.nav.transition_to(target);

        let entering = from.flow() != target.flow() && from.flow() != Flow::Dev;
        if entering {
            tracing::debug!("Entering {:?} flow", target.flow());
            self.drafts.reset(target.flow(), &self.catalog);
        }
        self.selection = 0;
    }

    pub fn view_context(&self) -> ViewContext<'_> {
        ViewContext {
            catalog: &self.catalog,
            nav: &self.nav,
            drafts: &self.drafts,
            selection: self.selection,
            logs: &self.logs,
        }
    }

    /// Current text of an editable field
    pub fn field_text(&self, field: InputField) -> &str {
        match field {
            InputField::TransferAmount => &self.nav.params.transfer_amount,
            InputField::ExchangeAmount => &self.nav.params.exchange_amount,
            InputField::CardPaymentOther => &self.drafts.card_payment.other_amount,
            InputField::QrAmount => &self.drafts.qr.amount,
            InputField::GoalTarget => &self.drafts.goal.target,
            InputField::GoalName => &self.drafts.goal.name,
            InputField::ServiceSupply => &self.drafts.services.supply,
        }
    }

    /// Replace the text of an editable field
    pub fn set_field_text(&mut self, field: InputField, text: String) {
        match field {
            InputField::TransferAmount => self.nav.set_transfer_amount(text),
            InputField::ExchangeAmount => self.nav.set_exchange_amount(text),
            InputField::CardPaymentOther => self.drafts.card_payment.other_amount = text,
            InputField::QrAmount => self.drafts.qr.amount = text,
            InputField::GoalTarget => self.drafts.goal.target = text,
            InputField::GoalName => self.drafts.goal.name = text,
            InputField::ServiceSupply => self.drafts.services.supply = text,
        }
    }

    /// Keep the highlight on an existing action after the view changed shape
    pub fn clamp_selection(&mut self, action_count: usize) {
        if action_count == 0 {
            self.selection = 0;
        } else if self.selection >= action_count {
            self.selection = action_count - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_resets_entered_flow_only() {
        let mut state = AppState::new(Catalog::builtin());
        state.navigate(ScreenId::LoanSimulator);
        state.drafts.loan.amount = 20_000;
        state.navigate(ScreenId::LoanReview);
        assert_eq!(state.drafts.loan.amount, 20_000);

        state.navigate(ScreenId::Home);
        state.navigate(ScreenId::LoanSimulator);
        assert_eq!(state.drafts.loan.amount, 15_000);
    }

    #[test]
    fn test_logs_remember_origin_and_keep_drafts() {
        let mut state = AppState::new(Catalog::builtin());
        state.navigate(ScreenId::LoanTerms);
        state.drafts.loan.terms_accepted = true;

        state.navigate(ScreenId::Logs);
        assert_eq!(state.logs.return_to, ScreenId::LoanTerms);

        state.navigate(ScreenId::LoanTerms);
        assert!(state.drafts.loan.terms_accepted);
    }

    #[test]
    fn test_navigate_keeps_flow_params() {
        let mut state = AppState::new(Catalog::builtin());
        state.nav.set_transfer_amount("100");
        state.navigate(ScreenId::ProfileSecurity);
        state.navigate(ScreenId::TransferConfirm);
        assert_eq!(state.nav.params.transfer_amount, "100");
    }

    #[test]
    fn test_field_text_reads_flow_params_and_drafts() {
        let mut state = AppState::new(Catalog::builtin());
        state.set_field_text(InputField::TransferAmount, "100".to_string());
        state.set_field_text(InputField::GoalName, "Auto".to_string());
        assert_eq!(state.nav.params.transfer_amount, "100");
        assert_eq!(state.field_text(InputField::TransferAmount), "100");
        assert_eq!(state.field_text(InputField::GoalName), "Auto");
    }

    #[test]
    fn test_clamp_selection() {
        let mut state = AppState::new(Catalog::builtin());
        state.selection = 5;
        state.clamp_selection(3);
        assert_eq!(state.selection, 2);
        state.clamp_selection(0);
        assert_eq!(state.selection, 0);
    }
}
