use banca_data::models::people::Contact;

use crate::events::{AppCommand, InputField};
use crate::state::ScreenId;
use crate::ui::utils::{fmt_keypad, fmt_money};
use crate::ui::view::{Action, Panel, Tone, View, ViewContext};
use crate::utils::keypad;

fn chosen_contact<'a>(ctx: &ViewContext<'a>) -> Option<&'a Contact> {
    ctx.nav
        .params
        .transfer_contact
        .as_ref()
        .and_then(|id| ctx.catalog.contact(id).ok())
}

fn contact_action(contact: &Contact) -> Action {
    Action::new(
        format!("{}  {}", contact.initials(), contact.name),
        AppCommand::ChooseContact(contact.id.clone()),
    )
    .detail(format!("{} {}", contact.bank, contact.account))
}

pub fn select(ctx: &ViewContext) -> View {
    let account = &ctx.nav.params.selected_account;
    let favorites = ctx.catalog.favorite_contacts().map(contact_action);
    let others = ctx
        .catalog
        .contacts
        .iter()
        .filter(|c| !c.favorite)
        .map(contact_action);

    View::new(ScreenId::TransferSelect, "Transferir a")
        .back(ScreenId::Operations)
        .panel(
            Panel::new("Desde")
                .text(account.name.as_str())
                .row("Saldo", fmt_money(account.balance, account.currency)),
        )
        .actions(favorites)
        .actions(others)
}

pub fn amount(ctx: &ViewContext) -> View {
    let params = &ctx.nav.params;
    let currency = params.selected_account.currency;

    let mut to = Panel::new("Para");
    match chosen_contact(ctx) {
        Some(contact) => to = to.text(contact.name.as_str()).note(contact.bank.as_str()),
        None => to = to.note("Sin destinatario"),
    }

    View::new(ScreenId::TransferAmount, "Monto a transferir")
        .back(ScreenId::TransferSelect)
        .panel(to)
        .panel(
            Panel::new("Monto")
                .toned("", fmt_keypad(&params.transfer_amount, currency), Tone::Accent)
                .note(format!(
                    "Disponible {}",
                    fmt_money(params.selected_account.balance, currency)
                )),
        )
        .input(InputField::TransferAmount)
        .action(Action::go("Continuar", ScreenId::TransferConfirm))
}

pub fn confirm(ctx: &ViewContext) -> View {
    let params = &ctx.nav.params;
    let currency = params.selected_account.currency;
    let amount = keypad::parse_amount(&params.transfer_amount);
    let recipient = chosen_contact(ctx)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "-".to_string());

    View::new(ScreenId::TransferConfirm, "Confirma tu transferencia")
        .back(ScreenId::TransferAmount)
        .panel(
            Panel::new("Resumen")
                .row("Desde", params.selected_account.name.as_str())
                .row("Para", recipient)
                .toned("Monto", fmt_money(amount, currency), Tone::Accent)
                .row("Comision", fmt_money(banca_data::models::Money::ZERO, currency)),
        )
        .action(Action::go("Confirmar transferencia", ScreenId::TransferSuccess))
        .action(Action::go("Cancelar", ScreenId::Home))
}

pub fn success(ctx: &ViewContext) -> View {
    let params = &ctx.nav.params;
    let amount = keypad::parse_amount(&params.transfer_amount);
    let recipient = chosen_contact(ctx)
        .map(|c| c.name.clone())
        .unwrap_or_default();

    View::new(ScreenId::TransferSuccess, "Transferencia exitosa")
        .panel(
            Panel::new("Constancia")
                .toned(
                    "Monto enviado",
                    fmt_money(amount, params.selected_account.currency),
                    Tone::Positive,
                )
                .row("Para", recipient)
                .row("Fecha", ctx.catalog.as_of.format("%d/%m/%Y").to_string()),
        )
        .action(Action::new("Nueva transferencia", AppCommand::NewTransfer))
        .action(Action::go("Ir al inicio", ScreenId::Home))
}
