use banca_data::models::{
    goals::GoalCategory, AccountId, BillerId, ContactId, Currency, GoalId, MerchantId,
};

use crate::state::drafts::{
    CardToggle, DeliveryMethod, PaymentOption, SecurityToggle, StatementPeriod,
};
use crate::state::ScreenId;
use crate::utils::keypad::KeypadKey;

/// Commands produced by key handling and bound to view actions
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,

    // Navigation
    Navigate(ScreenId),
    CycleTab {
        forward: bool,
    },

    // Navigation carrying parameters
    OpenAccount(AccountId),
    PayCard(AccountId),
    ChooseContact(ContactId),
    NewTransfer,
    OpenGoal(GoalId),
    ChooseGoalCategory(GoalCategory),
    ChooseBiller(BillerId),
    ScanMerchant(MerchantId),

    // Field editing
    Input {
        field: InputField,
        key: InputKey,
    },
    SwapExchangeCurrency,
    ExchangeShare(u8),

    // Widgets
    Choose(Choice),
    Toggle(Setting),
    ToggleBill(usize),
    ToggleAllBills,
    Adjust {
        target: Adjuster,
        up: bool,
    },

    // UI
    ToggleHelp,
    SetPendingKey(char),
    ClearPendingKey,

    // Logs
    NavigateToLogs,
    ScrollLogsUp,
    ScrollLogsDown,
    ScrollLogsPageUp,
    ScrollLogsPageDown,
    ScrollLogsToTop,
    ScrollLogsToBottom,

    Quit,
}

/// Editable text fields. Which one is live depends on the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    TransferAmount,
    ExchangeAmount,
    CardPaymentOther,
    QrAmount,
    GoalTarget,
    GoalName,
    ServiceSupply,
}

/// How a field interprets typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Keypad amount: digits and a single decimal point
    Amount,
    /// Digits only, bounded length
    Digits,
    /// Free text
    Text,
}

pub const GOAL_NAME_MAX_LEN: usize = 40;

impl InputField {
    pub fn kind(&self) -> FieldKind {
        match self {
            InputField::ServiceSupply => FieldKind::Digits,
            InputField::GoalName => FieldKind::Text,
            _ => FieldKind::Amount,
        }
    }

    /// Translate a typed character into a key for this field
    pub fn key_for(&self, c: char) -> Option<InputKey> {
        match self.kind() {
            FieldKind::Amount => KeypadKey::from_char(c).map(InputKey::Keypad),
            FieldKind::Digits => match KeypadKey::from_char(c) {
                Some(key @ KeypadKey::Digit(_)) => Some(InputKey::Keypad(key)),
                _ => None,
            },
            FieldKind::Text if !c.is_control() => Some(InputKey::Char(c)),
            FieldKind::Text => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Keypad(KeypadKey),
    Char(char),
    Delete,
}

/// Radio-style choices
#[derive(Debug, Clone, PartialEq)]
pub enum Choice {
    PaymentOption(PaymentOption),
    PaymentSource(AccountId),
    LoanCurrency(Currency),
    LoanPayout(AccountId),
    StatementProduct(AccountId),
    StatementPeriod(StatementPeriod),
    DeliveryMethod(DeliveryMethod),
}

/// Checkbox and switch settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    LoanTerms,
    Security(SecurityToggle),
    Card(CardToggle),
}

/// Sliders and steppers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjuster {
    LoanAmount,
    LoanMonths,
    GoalContribution,
    CardDailyLimit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_fields_accept_digits_and_dot() {
        let field = InputField::TransferAmount;
        assert_eq!(
            field.key_for('7'),
            Some(InputKey::Keypad(KeypadKey::Digit(7)))
        );
        assert_eq!(field.key_for('.'), Some(InputKey::Keypad(KeypadKey::Dot)));
        assert_eq!(field.key_for('q'), None);
    }

    #[test]
    fn test_supply_field_rejects_dot() {
        assert_eq!(InputField::ServiceSupply.key_for('.'), None);
        assert!(InputField::ServiceSupply.key_for('4').is_some());
    }

    #[test]
    fn test_text_field_takes_any_printable() {
        assert_eq!(InputField::GoalName.key_for('q'), Some(InputKey::Char('q')));
        assert_eq!(InputField::GoalName.key_for('\u{7}'), None);
    }
}
