use banca_data::models::{AccountId, BillerId, ContactId, GoalId, MerchantId};

use crate::events::{
    Adjuster, AppCommand, Choice, FieldKind, InputField, InputKey, Setting, GOAL_NAME_MAX_LEN,
};
use crate::state::{AppState, ScreenId};
use crate::ui::registry;
use crate::utils::{exchange, keypad, loans, savings};

const LOGS_PAGE_SIZE: usize = 20;

/// Apply a command to the app state
pub fn execute_command(command: AppCommand, state: &mut AppState) {
    // Save whether we're setting a pending key (we don't want to clear it in that case)
    let is_setting_pending_key = matches!(command, AppCommand::SetPendingKey(_));
    let action_count = registry::build(&state.view_context()).actions.len();

    match command {
        AppCommand::SelectNext => {
            if action_count > 0 {
                state.selection = (state.selection + 1) % action_count;
            }
        }

        AppCommand::SelectPrevious => {
            if action_count > 0 {
                state.selection = if state.selection == 0 {
                    action_count - 1
                } else {
                    state.selection - 1
                };
            }
        }

        AppCommand::SelectFirst => {
            state.selection = 0;
        }

        AppCommand::SelectLast => {
            state.selection = action_count.saturating_sub(1);
        }

        AppCommand::Navigate(target) => {
            state.navigate(target);
        }

        AppCommand::CycleTab { forward } => {
            let tabs = ScreenId::TABS;
            let current = tabs
                .iter()
                .position(|s| *s == state.current_screen())
                .unwrap_or(0);
            let next = if forward {
                (current + 1) % tabs.len()
            } else {
                (current + tabs.len() - 1) % tabs.len()
            };
            state.navigate(tabs[next]);
        }

        AppCommand::OpenAccount(id) => open_account(state, id),
        AppCommand::PayCard(id) => {
            state.navigate(ScreenId::CardPaymentAmount);
            state.drafts.card_payment.card = Some(id);
        }
        AppCommand::ChooseContact(id) => choose_contact(state, id),
        AppCommand::NewTransfer => {
            state.nav.set_transfer_amount("0");
            state.nav.set_transfer_contact(None);
            state.navigate(ScreenId::TransferSelect);
        }
        AppCommand::OpenGoal(id) => open_goal(state, id),
        AppCommand::ChooseGoalCategory(category) => {
            state.drafts.goal.category = category;
            state.navigate(ScreenId::GoalsCreateDetails);
        }
        AppCommand::ChooseBiller(id) => choose_biller(state, id),
        AppCommand::ScanMerchant(id) => scan_merchant(state, id),

        AppCommand::Input { field, key } => apply_input(state, field, key),

        AppCommand::SwapExchangeCurrency => {
            let other = state.nav.params.exchange_currency.other();
            state.nav.set_exchange_currency(other);
        }

        AppCommand::ExchangeShare(percent) => {
            let from = state.nav.params.exchange_currency;
            match exchange::source_account(&state.catalog, from) {
                Some(account) => {
                    let amount = exchange::share_of(account.balance, percent);
                    state.nav.set_exchange_amount(keypad::amount_text(amount));
                }
                None => tracing::warn!("No {} account to exchange from", from),
            }
        }

        AppCommand::Choose(choice) => apply_choice(state, choice),

        AppCommand::Toggle(setting) => match setting {
            Setting::LoanTerms => {
                state.drafts.loan.terms_accepted = !state.drafts.loan.terms_accepted;
            }
            Setting::Security(toggle) => state.drafts.security.toggle(toggle),
            Setting::Card(toggle) => state.drafts.card_settings.toggle(toggle),
        },

        AppCommand::ToggleBill(index) => state.drafts.services.toggle_bill(index),
        AppCommand::ToggleAllBills => state.drafts.services.toggle_all(),

        AppCommand::Adjust { target, up } => match target {
            Adjuster::LoanAmount => {
                let loan = &mut state.drafts.loan;
                loan.amount = loans::adjust_amount(loan.amount, up, &state.catalog.loan_offer);
            }
            Adjuster::LoanMonths => {
                let loan = &mut state.drafts.loan;
                loan.months = loans::adjust_months(loan.months, up, &state.catalog.loan_offer);
            }
            Adjuster::GoalContribution => {
                let goal = &mut state.drafts.goal;
                goal.contribution = savings::adjust_contribution(goal.contribution, up);
            }
            Adjuster::CardDailyLimit => state.drafts.card_settings.adjust_limit(up),
        },

        AppCommand::ToggleHelp => {
            state.help_visible = !state.help_visible;
        }

        AppCommand::SetPendingKey(c) => {
            state.pending_key = Some(c);
        }

        AppCommand::ClearPendingKey => {
            state.pending_key = None;
        }

        AppCommand::NavigateToLogs => {
            // No logging here to avoid a feedback loop on the logs screen
            state.navigate(ScreenId::Logs);
        }

        AppCommand::ScrollLogsUp => {
            let logs = &mut state.logs;
            // Scroll up means going back in time (increase offset)
            if logs.scroll_offset < logs.total_entries.saturating_sub(1) {
                logs.scroll_offset += 1;
            }
        }

        AppCommand::ScrollLogsDown => {
            state.logs.scroll_offset = state.logs.scroll_offset.saturating_sub(1);
        }

        AppCommand::ScrollLogsPageUp => {
            let logs = &mut state.logs;
            logs.scroll_offset =
                (logs.scroll_offset + LOGS_PAGE_SIZE).min(logs.total_entries.saturating_sub(1));
        }

        AppCommand::ScrollLogsPageDown => {
            state.logs.scroll_offset = state.logs.scroll_offset.saturating_sub(LOGS_PAGE_SIZE);
        }

        AppCommand::ScrollLogsToTop => {
            state.logs.scroll_offset = state.logs.total_entries.saturating_sub(1);
        }

        AppCommand::ScrollLogsToBottom => {
            state.logs.scroll_offset = 0;
        }

        AppCommand::Quit => {
            state.should_quit = true;
        }
    }

    // Clear pending key after any command except SetPendingKey
    if !is_setting_pending_key && state.pending_key.is_some() {
        state.pending_key = None;
    }

    // The command may have changed the view's shape
    let action_count = registry::build(&state.view_context()).actions.len();
    state.clamp_selection(action_count);
}

fn open_account(state: &mut AppState, id: AccountId) {
    let account = match state.catalog.account(&id) {
        Ok(account) => account.clone(),
        Err(e) => {
            tracing::warn!("Cannot open account: {}", e);
            return;
        }
    };

    state.nav.set_selected_account(account);
    state.navigate(ScreenId::ProductDetail);
}

fn choose_contact(state: &mut AppState, id: ContactId) {
    if let Err(e) = state.catalog.contact(&id) {
        tracing::warn!("Cannot transfer: {}", e);
        return;
    }
    state.nav.set_transfer_contact(Some(id));
    state.navigate(ScreenId::TransferAmount);
}

fn open_goal(state: &mut AppState, id: GoalId) {
    let Some(contribution) = state
        .catalog
        .goals
        .iter()
        .find(|g| g.id == id)
        .map(|g| g.monthly_contribution)
    else {
        tracing::warn!("Cannot open goal: {} not found", id);
        return;
    };

    state.navigate(ScreenId::GoalDetail);
    state.drafts.goal.selected = Some(id);
    state.drafts.goal.contribution = contribution;
}

fn choose_biller(state: &mut AppState, id: BillerId) {
    let biller = match state.catalog.biller(&id) {
        Ok(biller) => biller.clone(),
        Err(e) => {
            tracing::warn!("Cannot pay service: {}", e);
            return;
        }
    };

    state.navigate(ScreenId::ServicesDetails);
    state.drafts.services.choose_biller(&biller);
}

fn scan_merchant(state: &mut AppState, id: MerchantId) {
    let suggested = match state.catalog.merchant(&id) {
        Ok(merchant) => merchant.suggested_amount,
        Err(e) => {
            tracing::warn!("Cannot pay merchant: {}", e);
            return;
        }
    };

    state.navigate(ScreenId::QrAmount);
    state.drafts.qr.merchant = Some(id);
    state.drafts.qr.amount = keypad::amount_text(suggested);
}

fn apply_input(state: &mut AppState, field: InputField, key: InputKey) {
    let text = state.field_text(field);
    let next = match (field.kind(), key) {
        (FieldKind::Amount, InputKey::Keypad(k)) => keypad::press(text, k),
        (FieldKind::Amount, InputKey::Delete) => keypad::press(text, keypad::KeypadKey::Delete),
        (FieldKind::Digits, InputKey::Keypad(k)) => keypad::press_digits(text, k),
        (FieldKind::Digits, InputKey::Delete) => {
            keypad::press_digits(text, keypad::KeypadKey::Delete)
        }
        (FieldKind::Text, InputKey::Char(c)) if text.chars().count() < GOAL_NAME_MAX_LEN => {
            format!("{}{}", text, c)
        }
        (FieldKind::Text, InputKey::Delete) => {
            let mut next = text.to_string();
            next.pop();
            next
        }
        _ => return,
    };
    state.set_field_text(field, next);
}

fn apply_choice(state: &mut AppState, choice: Choice) {
    let drafts = &mut state.drafts;
    match choice {
        Choice::PaymentOption(option) => drafts.card_payment.option = option,
        Choice::PaymentSource(id) => drafts.card_payment.source = Some(id),
        Choice::LoanCurrency(currency) => drafts.loan.currency = currency,
        Choice::LoanPayout(id) => drafts.loan.payout = Some(id),
        Choice::StatementProduct(id) => drafts.statement.product = Some(id),
        Choice::StatementPeriod(period) => drafts.statement.period = period,
        Choice::DeliveryMethod(method) => drafts.statement.method = method,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Choice;
    use crate::state::drafts::{PaymentOption, SecurityToggle};
    use crate::utils::keypad::KeypadKey;
    use banca_data::models::Currency;
    use banca_data::Catalog;

    fn state_on(screen: ScreenId) -> AppState {
        let mut state = AppState::new(Catalog::builtin());
        state.navigate(screen);
        state
    }

    fn type_digits(state: &mut AppState, field: InputField, digits: &str) {
        for c in digits.chars() {
            if let Some(key) = field.key_for(c) {
                execute_command(AppCommand::Input { field, key }, state);
            }
        }
    }

    #[test]
    fn test_selection_wraps() {
        let mut state = state_on(ScreenId::Operations);
        execute_command(AppCommand::SelectPrevious, &mut state);
        assert!(state.selection > 0);
        execute_command(AppCommand::SelectNext, &mut state);
        assert_eq!(state.selection, 0);
    }

    #[test]
    fn test_cycle_tab_wraps_both_ways() {
        let mut state = state_on(ScreenId::Home);
        execute_command(AppCommand::CycleTab { forward: false }, &mut state);
        assert_eq!(state.current_screen(), ScreenId::ForYou);
        execute_command(AppCommand::CycleTab { forward: true }, &mut state);
        assert_eq!(state.current_screen(), ScreenId::Home);
    }

    #[test]
    fn test_open_account_sets_flow_param() {
        let mut state = state_on(ScreenId::Home);
        let id = state.catalog.accounts[1].id.clone();
        execute_command(AppCommand::OpenAccount(id.clone()), &mut state);
        assert_eq!(state.current_screen(), ScreenId::ProductDetail);
        assert_eq!(state.nav.params.selected_account.id, id);
    }

    #[test]
    fn test_unknown_account_stays_put() {
        let mut state = state_on(ScreenId::Home);
        execute_command(AppCommand::OpenAccount(AccountId::from("nope")), &mut state);
        assert_eq!(state.current_screen(), ScreenId::Home);
    }

    #[test]
    fn test_amount_typing_uses_keypad_rules() {
        let mut state = state_on(ScreenId::TransferAmount);
        type_digits(&mut state, InputField::TransferAmount, "0012.3");
        assert_eq!(state.nav.params.transfer_amount, "12.3");

        execute_command(
            AppCommand::Input {
                field: InputField::TransferAmount,
                key: InputKey::Delete,
            },
            &mut state,
        );
        assert_eq!(state.nav.params.transfer_amount, "12.");
    }

    #[test]
    fn test_goal_name_is_bounded() {
        let mut state = state_on(ScreenId::GoalsCreateDetails);
        for _ in 0..GOAL_NAME_MAX_LEN + 5 {
            execute_command(
                AppCommand::Input {
                    field: InputField::GoalName,
                    key: InputKey::Char('a'),
                },
                &mut state,
            );
        }
        assert_eq!(state.drafts.goal.name.len(), GOAL_NAME_MAX_LEN);
    }

    #[test]
    fn test_new_transfer_resets_amount() {
        let mut state = state_on(ScreenId::TransferAmount);
        type_digits(&mut state, InputField::TransferAmount, "100");
        execute_command(AppCommand::NewTransfer, &mut state);
        assert_eq!(state.current_screen(), ScreenId::TransferSelect);
        assert_eq!(state.nav.params.transfer_amount, "0");
    }

    #[test]
    fn test_exchange_share_and_swap() {
        let mut state = state_on(ScreenId::Exchange);
        execute_command(AppCommand::ExchangeShare(100), &mut state);
        let source = exchange::source_account(&state.catalog, Currency::Pen)
            .map(|a| a.balance)
            .unwrap();
        assert_eq!(state.nav.params.exchange_amount, keypad::amount_text(source));

        execute_command(AppCommand::SwapExchangeCurrency, &mut state);
        assert_eq!(state.nav.params.exchange_currency, Currency::Usd);
    }

    #[test]
    fn test_scan_merchant_prefills_amount() {
        let mut state = state_on(ScreenId::QrScan);
        let merchant = state.catalog.merchants[0].clone();
        execute_command(AppCommand::ScanMerchant(merchant.id.clone()), &mut state);
        assert_eq!(state.current_screen(), ScreenId::QrAmount);
        assert_eq!(
            state.drafts.qr.amount,
            keypad::amount_text(merchant.suggested_amount)
        );
    }

    #[test]
    fn test_pay_card_survives_flow_reset() {
        let mut state = state_on(ScreenId::ProductDetail);
        let card = state.catalog.credit_cards().last().map(|a| a.id.clone()).unwrap();
        execute_command(AppCommand::PayCard(card.clone()), &mut state);
        assert_eq!(state.current_screen(), ScreenId::CardPaymentAmount);
        assert_eq!(state.drafts.card_payment.card, Some(card));
    }

    #[test]
    fn test_choices_and_toggles() {
        let mut state = state_on(ScreenId::CardPaymentAmount);
        execute_command(
            AppCommand::Choose(Choice::PaymentOption(PaymentOption::Total)),
            &mut state,
        );
        assert_eq!(state.drafts.card_payment.option, PaymentOption::Total);

        execute_command(
            AppCommand::Toggle(Setting::Security(SecurityToggle::UseAbroad)),
            &mut state,
        );
        assert!(state.drafts.security.use_abroad);
    }

    #[test]
    fn test_loan_adjusters_stay_in_offer_bounds() {
        let mut state = state_on(ScreenId::LoanSimulator);
        for _ in 0..200 {
            execute_command(
                AppCommand::Adjust {
                    target: Adjuster::LoanAmount,
                    up: true,
                },
                &mut state,
            );
        }
        assert_eq!(state.drafts.loan.amount, state.catalog.loan_offer.max_amount);
    }

    #[test]
    fn test_pending_key_cleared_after_other_command() {
        let mut state = state_on(ScreenId::Home);
        execute_command(AppCommand::SetPendingKey('g'), &mut state);
        assert_eq!(state.pending_key, Some('g'));
        execute_command(AppCommand::SelectNext, &mut state);
        assert_eq!(state.pending_key, None);
    }

    #[test]
    fn test_logs_scroll_is_bounded() {
        let mut state = state_on(ScreenId::Home);
        execute_command(AppCommand::NavigateToLogs, &mut state);
        state.logs.total_entries = 30;

        execute_command(AppCommand::ScrollLogsPageUp, &mut state);
        execute_command(AppCommand::ScrollLogsPageUp, &mut state);
        assert_eq!(state.logs.scroll_offset, 29);

        execute_command(AppCommand::ScrollLogsDown, &mut state);
        assert_eq!(state.logs.scroll_offset, 28);

        execute_command(AppCommand::ScrollLogsToBottom, &mut state);
        assert_eq!(state.logs.scroll_offset, 0);
    }

    #[test]
    fn test_digit_field_rejects_dot_from_keypad() {
        let mut state = state_on(ScreenId::ServicesDetails);
        execute_command(
            AppCommand::Input {
                field: InputField::ServiceSupply,
                key: InputKey::Keypad(KeypadKey::Digit(4)),
            },
            &mut state,
        );
        execute_command(
            AppCommand::Input {
                field: InputField::ServiceSupply,
                key: InputKey::Keypad(KeypadKey::Dot),
            },
            &mut state,
        );
        assert_eq!(state.drafts.services.supply, "4");
    }
}
