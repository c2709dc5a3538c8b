use banca_data::models::{Currency, Money};

use crate::events::{Adjuster, AppCommand, Choice, Setting};
use crate::state::ScreenId;
use crate::ui::utils::{account_line, fmt_money};
use crate::ui::view::{Action, Marker, Panel, Tone, View, ViewContext};
use crate::utils::loans;

fn quote_panel(ctx: &ViewContext) -> Panel {
    let draft = &ctx.drafts.loan;
    let rate = ctx.catalog.loan_offer.annual_rate;
    let principal = Money::from_units(draft.amount);
    let installment = loans::installment(principal, rate, draft.months);

    Panel::new("Tu prestamo")
        .toned("Cuota mensual", fmt_money(installment, draft.currency), Tone::Accent)
        .row("TEA", format!("{:.2}%", rate * 100.0))
        .row(
            "Total a pagar",
            fmt_money(loans::total_cost(principal, rate, draft.months), draft.currency),
        )
}

pub fn simulator(ctx: &ViewContext) -> View {
    let draft = &ctx.drafts.loan;
    let offer = &ctx.catalog.loan_offer;

    let currencies = [Currency::Pen, Currency::Usd].map(|currency| {
        let label = match currency {
            Currency::Pen => "En soles",
            Currency::Usd => "En dolares",
        };
        Action::new(label, AppCommand::Choose(Choice::LoanCurrency(currency)))
            .marker(Marker::Radio(draft.currency == currency))
    });

    View::new(ScreenId::LoanSimulator, "Simula tu prestamo")
        .back(ScreenId::Operations)
        .panel(quote_panel(ctx))
        .panel(Panel::new("Rango").note(format!(
            "{} a {} en {} a {} meses",
            fmt_money(Money::from_units(offer.min_amount), draft.currency),
            fmt_money(Money::from_units(offer.max_amount), draft.currency),
            offer.min_months,
            offer.max_months
        )))
        .actions(currencies)
        .action(
            Action::adjuster("Monto", Adjuster::LoanAmount)
                .detail(fmt_money(Money::from_units(draft.amount), draft.currency)),
        )
        .action(
            Action::adjuster("Plazo", Adjuster::LoanMonths)
                .detail(format!("{} meses", draft.months)),
        )
        .action(Action::go("Solicitar prestamo", ScreenId::LoanReview))
}

pub fn review(ctx: &ViewContext) -> View {
    let draft = &ctx.drafts.loan;
    let chosen = draft.payout.as_ref();
    let accounts = ctx.catalog.deposit_accounts().map(|account| {
        Action::new(
            account_line(account),
            AppCommand::Choose(Choice::LoanPayout(account.id.clone())),
        )
        .detail(account.currency.code())
        .marker(Marker::Radio(chosen == Some(&account.id)))
    });

    View::new(ScreenId::LoanReview, "Revisa tu solicitud")
        .back(ScreenId::LoanSimulator)
        .panel(
            quote_panel(ctx)
                .row("Monto", fmt_money(Money::from_units(draft.amount), draft.currency))
                .row("Plazo", format!("{} meses", draft.months)),
        )
        .panel(Panel::new("Abonar en").note("Elige la cuenta de desembolso"))
        .actions(accounts)
        .action(Action::go("Continuar", ScreenId::LoanTerms).enabled(chosen.is_some()))
}

pub fn terms(ctx: &ViewContext) -> View {
    let accepted = ctx.drafts.loan.terms_accepted;
    View::new(ScreenId::LoanTerms, "Terminos y condiciones")
        .back(ScreenId::LoanReview)
        .panel(
            Panel::new("Contrato")
                .text("El prestamo se desembolsa en la cuenta elegida.")
                .text("Las cuotas se cargan mensualmente en la misma cuenta.")
                .text("Puedes hacer prepagos sin penalidad.")
                .note("Incluye seguro de desgravamen"),
        )
        .action(
            Action::new(
                "Acepto los terminos y condiciones",
                AppCommand::Toggle(Setting::LoanTerms),
            )
            .marker(Marker::Check(accepted)),
        )
        .action(Action::go("Confirmar prestamo", ScreenId::LoanSuccess).enabled(accepted))
}

pub fn success(ctx: &ViewContext) -> View {
    let draft = &ctx.drafts.loan;
    let payout = draft
        .payout
        .as_ref()
        .and_then(|id| ctx.catalog.account(id).ok())
        .map(|a| a.name.clone())
        .unwrap_or_default();

    View::new(ScreenId::LoanSuccess, "Prestamo aprobado")
        .panel(
            Panel::new("Desembolso")
                .toned(
                    "Monto",
                    fmt_money(Money::from_units(draft.amount), draft.currency),
                    Tone::Positive,
                )
                .row("Abonado en", payout)
                .row("Plazo", format!("{} meses", draft.months)),
        )
        .action(Action::go("Ir al inicio", ScreenId::Home))
}
