use banca_data::models::{accounts::Account, Currency, Money};

use crate::events::{AppCommand, Choice, InputField};
use crate::state::drafts::PaymentOption;
use crate::state::ScreenId;
use crate::ui::utils::{account_line, fmt_keypad, fmt_money};
use crate::ui::view::{Action, Marker, Panel, Tone, View, ViewContext};

fn chosen_card<'a>(ctx: &ViewContext<'a>) -> Option<&'a Account> {
    ctx.drafts
        .card_payment
        .card
        .as_ref()
        .and_then(|id| ctx.catalog.account(id).ok())
}

fn chosen_source<'a>(ctx: &ViewContext<'a>) -> Option<&'a Account> {
    ctx.drafts
        .card_payment
        .source
        .as_ref()
        .and_then(|id| ctx.catalog.account(id).ok())
}

fn payment_amount(ctx: &ViewContext) -> (Money, Currency) {
    match chosen_card(ctx) {
        Some(card) => (ctx.drafts.card_payment.amount(card), card.currency),
        None => (Money::ZERO, Currency::Pen),
    }
}

/// Card selection, also reached through the `CardPayment` alias
pub fn select(ctx: &ViewContext) -> View {
    let cards: Vec<Action> = ctx
        .catalog
        .credit_cards()
        .map(|card| {
            let debt = card
                .credit_line
                .as_ref()
                .map(|line| line.total_debt)
                .unwrap_or_default();
            Action::new(card.name.as_str(), AppCommand::PayCard(card.id.clone()))
                .detail(format!("{}  Deuda {}", card.number, fmt_money(debt, card.currency)))
        })
        .collect();

    let mut view = View::new(ctx.nav.current, "Pago de tarjeta").back(ScreenId::Operations);
    if cards.is_empty() {
        view = view.panel(Panel::new("Tarjetas").note("No tienes tarjetas de credito"));
    }
    view.panel(Panel::new("Elige la tarjeta a pagar")).actions(cards)
}

pub fn amount(ctx: &ViewContext) -> View {
    let draft = &ctx.drafts.card_payment;
    let card = chosen_card(ctx);
    let currency = card.map(|c| c.currency).unwrap_or_default();
    let line = card.and_then(|c| c.credit_line.as_ref());

    let options = PaymentOption::ALL.into_iter().map(|option| {
        let detail = match (option, line) {
            (PaymentOption::Month, Some(line)) => fmt_money(line.monthly_payment, currency),
            (PaymentOption::Minimum, Some(line)) => fmt_money(line.minimum_payment, currency),
            (PaymentOption::Total, Some(line)) => fmt_money(line.total_debt, currency),
            (PaymentOption::Other, _) => fmt_keypad(&draft.other_amount, currency),
            (_, None) => "-".to_string(),
        };
        Action::new(option.label(), AppCommand::Choose(Choice::PaymentOption(option)))
            .detail(detail)
            .marker(Marker::Radio(draft.option == option))
    });

    let (amount, _) = payment_amount(ctx);
    let mut view = View::new(ScreenId::CardPaymentAmount, "Cuanto deseas pagar?")
        .back(ScreenId::CardPaymentSelect)
        .panel(
            Panel::new(card.map(|c| c.name.as_str()).unwrap_or("Tarjeta"))
                .row("Numero", card.map(|c| c.number.as_str()).unwrap_or("-"))
                .toned("A pagar", fmt_money(amount, currency), Tone::Accent),
        )
        .actions(options)
        .action(
            Action::go("Continuar", ScreenId::CardPaymentSource).enabled(amount > Money::ZERO),
        );
    if draft.option == PaymentOption::Other {
        view = view.input(InputField::CardPaymentOther);
    }
    view
}

pub fn source(ctx: &ViewContext) -> View {
    let chosen = ctx.drafts.card_payment.source.as_ref();
    let accounts = ctx.catalog.deposit_accounts().map(|account| {
        Action::new(
            account_line(account),
            AppCommand::Choose(Choice::PaymentSource(account.id.clone())),
        )
        .detail(fmt_money(account.balance, account.currency))
        .marker(Marker::Radio(chosen == Some(&account.id)))
    });

    View::new(ScreenId::CardPaymentSource, "Desde que cuenta?")
        .back(ScreenId::CardPaymentAmount)
        .actions(accounts)
        .action(Action::go("Continuar", ScreenId::CardPaymentConfirm).enabled(chosen.is_some()))
}

pub fn confirm(ctx: &ViewContext) -> View {
    let (amount, currency) = payment_amount(ctx);
    let card = chosen_card(ctx).map(|c| c.name.clone()).unwrap_or_default();
    let source = chosen_source(ctx).map(|a| a.name.clone()).unwrap_or_default();

    View::new(ScreenId::CardPaymentConfirm, "Confirma tu pago")
        .back(ScreenId::CardPaymentSource)
        .panel(
            Panel::new("Resumen")
                .row("Tarjeta", card)
                .row("Desde", source)
                .toned("Monto", fmt_money(amount, currency), Tone::Accent),
        )
        .action(Action::go("Pagar", ScreenId::CardPaymentSuccess))
        .action(Action::go("Cancelar", ScreenId::Home))
}

pub fn success(ctx: &ViewContext) -> View {
    let (amount, currency) = payment_amount(ctx);
    View::new(ScreenId::CardPaymentSuccess, "Pago exitoso")
        .panel(
            Panel::new("Constancia")
                .toned("Pagaste", fmt_money(amount, currency), Tone::Positive)
                .row("Fecha", ctx.catalog.as_of.format("%d/%m/%Y").to_string()),
        )
        .action(Action::go("Ir al inicio", ScreenId::Home))
}
