use banca_data::models::{payments::Biller, Currency, Money};

use crate::events::{AppCommand, InputField};
use crate::state::ScreenId;
use crate::ui::utils::fmt_money;
use crate::ui::view::{Action, Marker, Panel, Tone, View, ViewContext};

fn chosen_biller<'a>(ctx: &ViewContext<'a>) -> Option<&'a Biller> {
    ctx.drafts
        .services
        .biller
        .as_ref()
        .and_then(|id| ctx.catalog.biller(id).ok())
}

fn selected_total(ctx: &ViewContext) -> Money {
    chosen_biller(ctx)
        .map(|biller| ctx.drafts.services.total(biller))
        .unwrap_or_default()
}

fn biller_panel(ctx: &ViewContext) -> Panel {
    match chosen_biller(ctx) {
        Some(biller) => Panel::new(biller.name.as_str())
            .note(format!("{} - {}", biller.category, biller.detail)),
        None => Panel::new("Empresa").note("Sin empresa elegida"),
    }
}

pub fn select(ctx: &ViewContext) -> View {
    let mut categories = Panel::new("Categorias");
    for category in &ctx.catalog.service_categories {
        categories = categories.text(category.as_str());
    }

    let billers = ctx.catalog.favorite_billers().map(|biller| {
        Action::new(biller.name.as_str(), AppCommand::ChooseBiller(biller.id.clone()))
            .detail(biller.detail.as_str())
    });

    View::new(ScreenId::ServicesSelect, "Pago de servicios")
        .back(ScreenId::Operations)
        .panel(categories)
        .actions(billers)
}

pub fn details(ctx: &ViewContext) -> View {
    let supply = &ctx.drafts.services.supply;
    let shown = if supply.is_empty() {
        "Ingresa tu numero de suministro".to_string()
    } else {
        supply.clone()
    };

    View::new(ScreenId::ServicesDetails, "Numero de suministro")
        .back(ScreenId::ServicesSelect)
        .panel(biller_panel(ctx))
        .panel(Panel::new("Suministro").toned(shown, "", Tone::Accent))
        .input(InputField::ServiceSupply)
        .action(Action::go("Continuar", ScreenId::ServicesDebt))
}

pub fn debt(ctx: &ViewContext) -> View {
    let draft = &ctx.drafts.services;
    let biller = chosen_biller(ctx);
    let bills = biller.map(|b| b.bills.as_slice()).unwrap_or_default();

    let rows = bills.iter().enumerate().map(|(index, bill)| {
        let selected = draft.selected_bills.get(index).copied().unwrap_or(false);
        Action::new(bill.period.as_str(), AppCommand::ToggleBill(index))
            .detail(format!("{}  {}", bill.due, fmt_money(bill.amount, Currency::Pen)))
            .marker(Marker::Check(selected))
    });

    let all_selected = !draft.selected_bills.is_empty() && draft.selected_bills.iter().all(|s| *s);
    let overdue = bills.iter().filter(|b| b.overdue).count();

    let mut summary = Panel::new("Recibos pendientes")
        .toned("Total a pagar", fmt_money(selected_total(ctx), Currency::Pen), Tone::Accent);
    if overdue > 0 {
        summary = summary.toned("Recibos vencidos", overdue.to_string(), Tone::Warning);
    }

    View::new(ScreenId::ServicesDebt, "Tus recibos")
        .back(ScreenId::ServicesDetails)
        .panel(biller_panel(ctx))
        .panel(summary)
        .action(
            Action::new("Seleccionar todo", AppCommand::ToggleAllBills)
                .marker(Marker::Check(all_selected)),
        )
        .actions(rows)
        .action(Action::go("Continuar", ScreenId::ServicesConfirm).enabled(draft.any_selected()))
}

pub fn confirm(ctx: &ViewContext) -> View {
    let draft = &ctx.drafts.services;
    let count = draft.selected_bills.iter().filter(|s| **s).count();

    View::new(ScreenId::ServicesConfirm, "Confirma tu pago")
        .back(ScreenId::ServicesDebt)
        .panel(
            biller_panel(ctx)
                .row("Suministro", draft.supply.as_str())
                .row("Recibos", count.to_string())
                .toned("Total", fmt_money(selected_total(ctx), Currency::Pen), Tone::Accent),
        )
        .action(Action::go("Pagar", ScreenId::ServicesSuccess))
        .action(Action::go("Cancelar", ScreenId::Home))
}

pub fn success(ctx: &ViewContext) -> View {
    View::new(ScreenId::ServicesSuccess, "Pago exitoso")
        .panel(
            biller_panel(ctx).toned(
                "Pagaste",
                fmt_money(selected_total(ctx), Currency::Pen),
                Tone::Positive,
            ),
        )
        .action(Action::go("Ir al inicio", ScreenId::Home))
}
