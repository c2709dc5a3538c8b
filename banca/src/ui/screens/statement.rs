use banca_data::models::accounts::Account;

use crate::events::{AppCommand, Choice};
use crate::state::drafts::{DeliveryMethod, StatementPeriod};
use crate::state::ScreenId;
use crate::ui::utils::{account_line, month_label};
use crate::ui::view::{Action, Marker, Panel, Tone, View, ViewContext};

fn chosen_product<'a>(ctx: &ViewContext<'a>) -> Option<&'a Account> {
    ctx.drafts
        .statement
        .product
        .as_ref()
        .and_then(|id| ctx.catalog.account(id).ok())
}

fn period_label(ctx: &ViewContext, period: StatementPeriod) -> String {
    match period.months_back() {
        Some(0) => format!("Mes actual ({})", month_label(ctx.catalog.as_of, 0)),
        Some(back) => month_label(ctx.catalog.as_of, back),
        None => "Rango personalizado".to_string(),
    }
}

fn method_label(method: DeliveryMethod) -> &'static str {
    match method {
        DeliveryMethod::Email => "Enviar a mi correo",
        DeliveryMethod::Download => "Descargar PDF",
    }
}

pub fn select_product(ctx: &ViewContext) -> View {
    let chosen = ctx.drafts.statement.product.as_ref();
    let products = ctx.catalog.accounts.iter().map(|account| {
        Action::new(
            account_line(account),
            AppCommand::Choose(Choice::StatementProduct(account.id.clone())),
        )
        .marker(Marker::Radio(chosen == Some(&account.id)))
    });

    View::new(ScreenId::StatementSelectProduct, "Estados de cuenta")
        .back(ScreenId::Operations)
        .panel(Panel::new("Producto").note("Elige la cuenta o tarjeta"))
        .actions(products)
        .action(
            Action::go("Continuar", ScreenId::StatementSelectPeriod).enabled(chosen.is_some()),
        )
}

pub fn select_period(ctx: &ViewContext) -> View {
    let chosen = ctx.drafts.statement.period;
    let periods = StatementPeriod::ALL.into_iter().map(|period| {
        Action::new(
            period_label(ctx, period),
            AppCommand::Choose(Choice::StatementPeriod(period)),
        )
        .marker(Marker::Radio(period == chosen))
    });

    View::new(ScreenId::StatementSelectPeriod, "Periodo")
        .back(ScreenId::StatementSelectProduct)
        .panel(Panel::new("Periodo").note("Selecciona el periodo que deseas consultar"))
        .actions(periods)
        .action(Action::go("Continuar", ScreenId::StatementDeliveryMethod))
}

pub fn delivery_method(ctx: &ViewContext) -> View {
    let chosen = ctx.drafts.statement.method;
    let methods = [DeliveryMethod::Email, DeliveryMethod::Download].map(|method| {
        Action::new(
            method_label(method),
            AppCommand::Choose(Choice::DeliveryMethod(method)),
        )
        .marker(Marker::Radio(method == chosen))
    });

    View::new(ScreenId::StatementDeliveryMethod, "Como lo quieres?")
        .back(ScreenId::StatementSelectPeriod)
        .panel(Panel::new("Correo").row("Destino", ctx.catalog.profile.email.as_str()))
        .actions(methods)
        .action(Action::go("Solicitar", ScreenId::StatementSuccess))
}

pub fn success(ctx: &ViewContext) -> View {
    let draft = &ctx.drafts.statement;
    let product = chosen_product(ctx)
        .map(|a| a.name.clone())
        .unwrap_or_default();
    let result = match draft.method {
        DeliveryMethod::Email => format!("Enviado a {}", ctx.catalog.profile.email),
        DeliveryMethod::Download => "Descargado en tu dispositivo".to_string(),
    };

    View::new(ScreenId::StatementSuccess, "Solicitud exitosa")
        .panel(
            Panel::new("Estado de cuenta")
                .row("Producto", product)
                .row("Periodo", period_label(ctx, draft.period))
                .toned(result, "", Tone::Positive),
        )
        .action(Action::go("Ir al inicio", ScreenId::Home))
}
