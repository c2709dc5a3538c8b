use banca_data::models::{payments::Merchant, Currency};

use crate::events::{AppCommand, InputField};
use crate::state::ScreenId;
use crate::ui::utils::{fmt_keypad, fmt_money};
use crate::ui::view::{Action, Panel, Tone, View, ViewContext};
use crate::utils::keypad;

fn scanned_merchant<'a>(ctx: &ViewContext<'a>) -> Option<&'a Merchant> {
    ctx.drafts
        .qr
        .merchant
        .as_ref()
        .and_then(|id| ctx.catalog.merchant(id).ok())
}

fn merchant_panel(ctx: &ViewContext) -> Panel {
    match scanned_merchant(ctx) {
        Some(merchant) => {
            Panel::new(merchant.name.as_str()).note(format!("Codigo {}", merchant.code))
        }
        None => Panel::new("Comercio").note("Sin codigo escaneado"),
    }
}

pub fn scan(ctx: &ViewContext) -> View {
    let merchants = ctx.catalog.merchants.iter().map(|merchant| {
        Action::new(
            format!("Codigo de {}", merchant.name),
            AppCommand::ScanMerchant(merchant.id.clone()),
        )
        .detail(merchant.code.as_str())
    });

    View::new(ScreenId::QrScan, "Escanear QR")
        .back(ScreenId::Home)
        .busy()
        .panel(
            Panel::new("Camara")
                .text("Apunta la camara al codigo QR")
                .note("Codigos detectados cerca"),
        )
        .actions(merchants)
}

pub fn amount(ctx: &ViewContext) -> View {
    View::new(ScreenId::QrAmount, "Monto a pagar")
        .back(ScreenId::QrScan)
        .panel(merchant_panel(ctx))
        .panel(Panel::new("Monto").toned(
            "",
            fmt_keypad(&ctx.drafts.qr.amount, Currency::Pen),
            Tone::Accent,
        ))
        .input(InputField::QrAmount)
        .action(Action::go("Continuar", ScreenId::QrConfirm))
}

pub fn confirm(ctx: &ViewContext) -> View {
    let amount = keypad::parse_amount(&ctx.drafts.qr.amount);
    View::new(ScreenId::QrConfirm, "Confirma tu pago")
        .back(ScreenId::QrAmount)
        .panel(
            merchant_panel(ctx)
                .row("Desde", ctx.nav.params.selected_account.name.as_str())
                .toned("Monto", fmt_money(amount, Currency::Pen), Tone::Accent),
        )
        .action(Action::go("Pagar", ScreenId::QrSuccess))
}

pub fn success(ctx: &ViewContext) -> View {
    let amount = keypad::parse_amount(&ctx.drafts.qr.amount);
    View::new(ScreenId::QrSuccess, "Pago exitoso")
        .panel(merchant_panel(ctx).toned(
            "Pagaste",
            fmt_money(amount, Currency::Pen),
            Tone::Positive,
        ))
        .action(Action::go("Ir al inicio", ScreenId::Home))
}
