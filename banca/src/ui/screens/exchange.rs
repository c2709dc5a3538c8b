use crate::events::{AppCommand, InputField};
use crate::state::ScreenId;
use crate::ui::utils::{fmt_keypad, fmt_money};
use crate::ui::view::{Action, Panel, Tone, View, ViewContext};
use crate::utils::{exchange, keypad};

fn quote_panel(ctx: &ViewContext) -> Panel {
    let rates = &ctx.catalog.rates;
    Panel::new("Tipo de cambio")
        .row("Compra", format!("{:.2}", rates.buy))
        .row("Venta", format!("{:.2}", rates.sell))
}

pub fn exchange(ctx: &ViewContext) -> View {
    let params = &ctx.nav.params;
    let from = params.exchange_currency;
    let to = from.other();
    let amount = keypad::parse_amount(&params.exchange_amount);
    let converted = exchange::convert(amount, from, &ctx.catalog.rates);

    let mut conversion = Panel::new("Cambio")
        .toned(
            format!("Envias ({})", from.code()),
            fmt_keypad(&params.exchange_amount, from),
            Tone::Accent,
        )
        .row(format!("Recibes ({})", to.code()), fmt_money(converted, to));
    if let Some(source) = exchange::source_account(ctx.catalog, from) {
        conversion = conversion.note(format!(
            "Desde {} ({})",
            source.name,
            fmt_money(source.balance, source.currency)
        ));
    }

    View::new(ScreenId::Exchange, "Cambio de moneda")
        .back(ScreenId::Home)
        .panel(quote_panel(ctx))
        .panel(conversion)
        .input(InputField::ExchangeAmount)
        .action(Action::new(
            format!("Invertir ({} -> {})", to.code(), from.code()),
            AppCommand::SwapExchangeCurrency,
        ))
        .action(Action::new("25%", AppCommand::ExchangeShare(25)))
        .action(Action::new("50%", AppCommand::ExchangeShare(50)))
        .action(Action::new("MAX", AppCommand::ExchangeShare(100)))
        .action(
            Action::go("Continuar", ScreenId::ExchangeConfirm)
                .enabled(!keypad::is_zero(&params.exchange_amount)),
        )
}

pub fn confirm(ctx: &ViewContext) -> View {
    let params = &ctx.nav.params;
    let from = params.exchange_currency;
    let amount = keypad::parse_amount(&params.exchange_amount);
    let converted = exchange::convert(amount, from, &ctx.catalog.rates);
    let rate = exchange::rate_for(from, &ctx.catalog.rates);

    View::new(ScreenId::ExchangeConfirm, "Confirma tu cambio")
        .back(ScreenId::Exchange)
        .panel(
            Panel::new("Resumen")
                .row("Envias", fmt_money(amount, from))
                .toned("Recibes", fmt_money(converted, from.other()), Tone::Accent)
                .row("Tipo de cambio", format!("{:.2}", rate))
                .note("Cotizacion valida por 2 minutos"),
        )
        .action(Action::go("Confirmar cambio", ScreenId::ExchangeSuccess))
}

pub fn success(ctx: &ViewContext) -> View {
    let params = &ctx.nav.params;
    let from = params.exchange_currency;
    let amount = keypad::parse_amount(&params.exchange_amount);
    let converted = exchange::convert(amount, from, &ctx.catalog.rates);

    View::new(ScreenId::ExchangeSuccess, "Cambio exitoso")
        .panel(
            Panel::new("Constancia")
                .row("Cambiaste", fmt_money(amount, from))
                .toned("Recibiste", fmt_money(converted, from.other()), Tone::Positive),
        )
        .action(Action::go("Ir al inicio", ScreenId::Home))
}
