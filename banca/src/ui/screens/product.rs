use itertools::Itertools;

use crate::events::AppCommand;
use crate::state::ScreenId;
use crate::ui::utils::{
    account_type_label, day_label, fmt_money, fmt_movement, movement_tone,
};
use crate::ui::view::{Action, Panel, Tone, View, ViewContext};

const MOVEMENTS_ON_DETAIL: usize = 5;

pub fn product_detail(ctx: &ViewContext) -> View {
    let account = &ctx.nav.params.selected_account;
    let today = ctx.catalog.as_of;

    let mut summary = Panel::new(account_type_label(account.account_type))
        .row("Numero", account.number.as_str())
        .toned(
            if account.is_credit() {
                "Linea disponible"
            } else {
                "Saldo disponible"
            },
            fmt_money(account.balance, account.currency),
            Tone::Accent,
        );
    if let Some(line) = &account.credit_line {
        summary = summary
            .row("Marca", line.brand.as_str())
            .row("Pago del mes", fmt_money(line.monthly_payment, account.currency))
            .row("Pago minimo", fmt_money(line.minimum_payment, account.currency))
            .toned(
                "Deuda total",
                fmt_money(line.total_debt, account.currency),
                Tone::Negative,
            );
    }

    let mut movements = Panel::new("Movimientos");
    let related = ctx
        .catalog
        .recent_transactions(usize::MAX)
        .into_iter()
        .filter(|t| t.currency == account.currency)
        .take(MOVEMENTS_ON_DETAIL);
    for transaction in related {
        movements = movements.toned(
            format!("{}  {}", day_label(transaction.date, today), transaction.title),
            fmt_movement(transaction),
            movement_tone(transaction),
        );
    }

    let primary = if account.is_credit() {
        Action::new("Pagar tarjeta", AppCommand::PayCard(account.id.clone()))
    } else {
        Action::go("Transferir", ScreenId::TransferSelect)
    };

    View::new(ScreenId::ProductDetail, account.name.as_str())
        .back(ScreenId::Home)
        .panel(summary)
        .panel(movements)
        .action(primary)
        .action(Action::go("Ver todos los movimientos", ScreenId::AllTransactions))
}

pub fn notifications(ctx: &ViewContext) -> View {
    let (today, earlier): (Vec<_>, Vec<_>) =
        ctx.catalog.notifications.iter().partition(|n| n.today);

    let mut view = View::new(ScreenId::Notifications, "Notificaciones").back(ScreenId::Home);
    for (title, group) in [("Hoy", today), ("Anteriores", earlier)] {
        if group.is_empty() {
            continue;
        }
        let mut panel = Panel::new(title);
        for notification in group {
            let tone = if notification.unread {
                Tone::Accent
            } else {
                Tone::Normal
            };
            panel = panel
                .toned(notification.title.as_str(), notification.time.as_str(), tone)
                .note(notification.body.as_str());
        }
        view = view.panel(panel);
    }
    view
}

pub fn all_transactions(ctx: &ViewContext) -> View {
    let today = ctx.catalog.as_of;
    let transactions = ctx.catalog.recent_transactions(usize::MAX);

    let mut view = View::new(ScreenId::AllTransactions, "Movimientos").back(ScreenId::Home);
    let by_day = transactions.into_iter().chunk_by(|t| t.date);
    for (date, group) in &by_day {
        let mut panel = Panel::new(day_label(date, today));
        for transaction in group {
            panel = panel.toned(
                format!("{} ({})", transaction.title, transaction.category),
                fmt_movement(transaction),
                movement_tone(transaction),
            );
        }
        view = view.panel(panel);
    }
    view
}
