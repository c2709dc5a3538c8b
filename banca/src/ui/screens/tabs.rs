use crate::events::AppCommand;
use crate::state::ScreenId;
use crate::ui::utils::{fmt_money, fmt_movement, movement_tone};
use crate::ui::view::{Action, Panel, Tone, View, ViewContext};

const RECENT_ON_HOME: usize = 3;

pub fn home(ctx: &ViewContext) -> View {
    let catalog = ctx.catalog;
    let first_name = catalog
        .profile
        .short_name
        .split_whitespace()
        .next()
        .unwrap_or_default();
    let unread = catalog.notifications.iter().filter(|n| n.unread).count();

    let mut recent = Panel::new("Ultimos movimientos");
    for transaction in catalog.recent_transactions(RECENT_ON_HOME) {
        recent = recent.toned(
            transaction.title.as_str(),
            fmt_movement(transaction),
            movement_tone(transaction),
        );
    }

    let accounts = catalog.accounts.iter().map(|account| {
        Action::new(
            account.name.as_str(),
            AppCommand::OpenAccount(account.id.clone()),
        )
        .detail(fmt_money(account.balance, account.currency))
    });

    View::new(ScreenId::Home, format!("Hola, {}", first_name))
        .panel(
            Panel::new(catalog.profile.tier.as_str())
                .row("Puntos", catalog.profile.points.to_string())
                .toned("Notificaciones sin leer", unread.to_string(), Tone::Accent),
        )
        .panel(recent)
        .actions(accounts)
        .action(Action::go("Transferir", ScreenId::TransferSelect))
        .action(Action::go("Cambio de moneda", ScreenId::Exchange))
        .action(Action::go("Pagar servicios", ScreenId::ServicesSelect))
        .action(Action::go("Pagar con QR", ScreenId::QrScan))
        .action(Action::go("Ver todos los movimientos", ScreenId::AllTransactions))
        .action(Action::go("Notificaciones", ScreenId::Notifications).detail(unread.to_string()))
        .action(Action::go("Mi perfil", ScreenId::Profile))
}

pub fn operations(_ctx: &ViewContext) -> View {
    View::new(ScreenId::Operations, "Operaciones")
        .panel(Panel::new("Que deseas hacer hoy?").note("Elige una operacion"))
        .action(Action::go("Transferencias", ScreenId::TransferSelect))
        .action(Action::go("Cambio de moneda", ScreenId::Exchange))
        .action(Action::go("Pago de tarjeta", ScreenId::CardPayment))
        .action(Action::go("Prestamo personal", ScreenId::LoanSimulator))
        .action(Action::go("Metas de ahorro", ScreenId::GoalsList))
        .action(Action::go("Pago de servicios", ScreenId::ServicesSelect))
        .action(Action::go("Pagar con QR", ScreenId::QrScan))
        .action(Action::go("Estados de cuenta", ScreenId::StatementSelectProduct))
}

pub fn for_you(ctx: &ViewContext) -> View {
    let catalog = ctx.catalog;

    let mut offers = Panel::new("Ofertas para ti");
    for offer in &catalog.offers {
        offers = offers
            .toned(offer.title.as_str(), offer.badge.as_str(), Tone::Accent)
            .note(offer.detail.as_str());
    }

    View::new(ScreenId::ForYou, "Para ti")
        .panel(offers)
        .panel(
            Panel::new("Categorias")
                .text("Restaurantes")
                .text("Viajes")
                .text("Entretenimiento")
                .text("Salud"),
        )
        .action(
            Action::go("Mis puntos", ScreenId::Notifications)
                .detail(format!("{} pts", catalog.profile.points)),
        )
}
